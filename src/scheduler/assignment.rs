use crate::model::{Schedule, Shift, ShiftKind, Worker};
use tracing::debug;

/// Premier-arrivé sur la liste de vœux du travailleur pour `kind` : la
/// première préférence dont le canonique est encore ouvert gagne, jamais la
/// meilleure. Retourne `false` sans aucune mutation si rien n'est ouvert.
pub(super) fn assign_shift(schedule: &mut Schedule, worker: &mut Worker, kind: ShiftKind) -> bool {
    let hit = match kind {
        ShiftKind::Midshift => worker
            .request
            .midshift_prefs
            .iter()
            .find_map(|pref| schedule.find_open_index(pref, kind)),
        // Généralisation desk/extra : preferred puis available puis secondary,
        // en sautant les créneaux devenus indisponibles entre-temps.
        ShiftKind::Desk | ShiftKind::Extra => worker
            .request
            .preferred
            .iter()
            .chain(&worker.request.available)
            .chain(&worker.request.secondary)
            .filter(|pref| !worker.request.unavailable.iter().any(|u| u.same_slot(pref)))
            .find_map(|pref| schedule.find_open_index(pref, kind)),
    };

    match hit {
        Some(index) => {
            commit(schedule, worker, kind, index);
            true
        }
        None => false,
    }
}

/// Engagement indivisible d'une affectation : décrément de capacité, ajout
/// de l'occupant, mise à jour du travailleur, puis propagation des
/// contraintes dérivées pour un midshift. Aucun autre travailleur ne
/// s'intercale, la passe est strictement séquentielle.
fn commit(schedule: &mut Schedule, worker: &mut Worker, kind: ShiftKind, index: usize) {
    let canonical = &mut schedule.pool_mut(kind)[index];
    canonical.spots -= 1;
    canonical.occupants.push(worker.id.clone());

    let hours = canonical.duration_hours();
    let key = canonical.slot_key();
    // Jour du quart réellement affecté, pas celui de la préférence.
    let day = canonical.weekday;

    worker.assigned_hours += hours;
    worker.assigned_shifts.push(key);

    if kind == ShiftKind::Midshift {
        // Blocages dérivés : le créneau qui suit le midshift, celui qui le
        // précède la veille, et l'après-midi déclassé en dernier recours.
        worker
            .request
            .unavailable
            .push(Shift::key(6.0, 12.0, day));
        worker
            .request
            .unavailable
            .push(Shift::key(21.0, 24.0, day.pred()));
        worker
            .request
            .secondary
            .push(Shift::key(12.0, 15.0, day));
    }

    debug!(
        worker = %worker.name,
        jour = day.index(),
        heures = hours,
        ?kind,
        "quart attribué"
    );
}
