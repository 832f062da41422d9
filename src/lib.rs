#![forbid(unsafe_code)]
//! Minuit — moteur d'affectation des quarts de nuit hebdomadaires (midshifts).
//!
//! - Modèle créneau/planning/vœux/travailleur en mémoire, sans BD.
//! - Passe midshift en deux phases : volontaires puis affectation forcée.
//! - Contraintes dérivées propagées après chaque midshift (créneaux voisins
//!   bloqués, après-midi déclassé).
//! - L'ingestion des vœux, la persistance et le rendu restent à la charge de
//!   l'appelant ; le moteur consomme des [`Request`] déjà construites.

pub mod model;
pub mod scheduler;

pub use model::{
    Request, Schedule, Shift, ShiftKind, Weekday, Worker, WorkerId, MIDSHIFT_END, MIDSHIFT_SPOTS,
    MIDSHIFT_START,
};
pub use scheduler::{AssignOptions, SchedError, Scheduler, VolunteerPolicy, MIDSHIFT_QUOTA};
