use super::{assignment, types::SchedError, AssignOptions, VolunteerPolicy, MIDSHIFT_QUOTA};
use crate::model::{Schedule, ShiftKind, Worker};
use tracing::{debug, warn};

/// Passe midshift en deux phases : volontaires d'abord, puis affectation
/// forcée de la queue de liste jusqu'à épuisement du quota.
///
/// En cas d'erreur, les mutations déjà engagées restent en place : le
/// planning retourné est partiellement rempli, pas restauré. L'appelant qui
/// veut l'atomicité clone `Schedule` et travailleurs avant la passe.
pub(super) fn build_midshift_schedule(
    schedule: &mut Schedule,
    workers: &mut [Worker],
    opts: AssignOptions,
) -> Result<(), SchedError> {
    if schedule.num_workers != workers.len() {
        return Err(SchedError::WorkerCountMismatch {
            expected: schedule.num_workers,
            actual: workers.len(),
        });
    }

    // Priorité explicite : tri stable, rangs dupliqués refusés.
    workers.sort_by_key(|w| w.priority);
    for pair in workers.windows(2) {
        if pair[0].priority == pair[1].priority {
            return Err(SchedError::DuplicatePriority(pair[0].priority));
        }
    }

    let total = workers.len();
    let mut quota = MIDSHIFT_QUOTA;

    // Phase 1 : volontaires, dans l'ordre de priorité.
    for (visited, worker) in workers.iter_mut().enumerate() {
        let not_yet_visited = (total - visited) as u32;
        if quota == not_yet_visited {
            // La queue de liste suffit tout juste à remplir le quota :
            // elle sera forcée en phase 2, inutile de continuer ici.
            debug!(quota, "phase volontaire arrêtée, quota = restants");
            break;
        }
        if worker.request.wants_midshift
            && quota > 0
            && assignment::assign_shift(schedule, worker, ShiftKind::Midshift)
        {
            quota -= 1;
            if opts.volunteer_policy == VolunteerPolicy::FirstOnly {
                break;
            }
        }
    }

    // Phase 2 : affectation forcée de la queue de liste.
    if quota > 0 {
        let offset = total.saturating_sub(quota as usize);
        for worker in &mut workers[offset..] {
            if !assignment::assign_shift(schedule, worker, ShiftKind::Midshift) {
                warn!(worker = %worker.name, "aucun midshift ouvert pour une affectation forcée");
                return Err(SchedError::MidshiftAssignmentFailed(worker.name.clone()));
            }
            quota -= 1;
        }
    }

    if quota != 0 {
        warn!(quota, "quota midshift non atteint en fin de passe");
        return Err(SchedError::QuotaUnmet(quota));
    }
    Ok(())
}
