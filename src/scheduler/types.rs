use thiserror::Error;

/// Quota système de places midshift : 7 jours × 2 places.
pub const MIDSHIFT_QUOTA: u32 = 14;

/// Comportement de la phase volontaire de [`build_midshift_schedule`].
///
/// [`build_midshift_schedule`]: crate::Scheduler::build_midshift_schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolunteerPolicy {
    /// La phase volontaire s'arrête après la première affectation réussie.
    /// C'est le comportement historique du système, conservé tel quel.
    FirstOnly,
    /// La phase volontaire parcourt toute la liste.
    Exhaustive,
}

/// Options d'une passe d'affectation
#[derive(Debug, Clone, Copy)]
pub struct AssignOptions {
    pub volunteer_policy: VolunteerPolicy,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            volunteer_policy: VolunteerPolicy::FirstOnly,
        }
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("worker count mismatch: schedule expects {expected}, got {actual}")]
    WorkerCountMismatch { expected: usize, actual: usize },
    #[error("duplicate worker priority: {0}")]
    DuplicatePriority(u32),
    #[error("no open midshift for forced worker: {0}")]
    MidshiftAssignmentFailed(String),
    #[error("midshift quota unmet: {0} spot(s) left unfilled")]
    QuotaUnmet(u32),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
