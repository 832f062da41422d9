mod allocation;
mod assignment;
mod types;

pub use types::{AssignOptions, SchedError, VolunteerPolicy, MIDSHIFT_QUOTA};

use crate::model::{Schedule, ShiftKind, Worker};

/// Scheduler : encapsule le planning d'une semaine en cours de remplissage
#[derive(Debug)]
pub struct Scheduler {
    schedule: Schedule,
}

impl Scheduler {
    pub fn new(schedule: Schedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
    pub fn schedule_mut(&mut self) -> &mut Schedule {
        &mut self.schedule
    }
    pub fn into_schedule(self) -> Schedule {
        self.schedule
    }

    /// Affecte au travailleur le premier créneau ouvert de sa liste de vœux
    /// pour `kind`. `true` si une affectation a eu lieu.
    pub fn assign_shift(&mut self, worker: &mut Worker, kind: ShiftKind) -> bool {
        assignment::assign_shift(&mut self.schedule, worker, kind)
    }

    /// Remplit les 14 places midshift de la semaine (voir [`MIDSHIFT_QUOTA`]).
    pub fn build_midshift_schedule(
        &mut self,
        workers: &mut [Worker],
        opts: AssignOptions,
    ) -> Result<(), SchedError> {
        allocation::build_midshift_schedule(&mut self.schedule, workers, opts)
    }
}
