use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Jour de la semaine, 0 = dimanche … 6 = samedi.
///
/// La construction accepte −1 et 7 pour les quarts qui débordent sur le jour
/// voisin : −1 se normalise en 6 (samedi), 7 en 0 (dimanche).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weekday(u8);

impl Weekday {
    pub fn new(day: i8) -> Self {
        debug_assert!((-1..=7).contains(&day), "weekday out of range: {day}");
        match day {
            -1 => Self(6),
            7 => Self(0),
            d => Self(d as u8),
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Jour précédent, avec le même bouclage que la construction.
    pub fn pred(self) -> Self {
        Self::new(self.0 as i8 - 1)
    }

    /// Jour suivant.
    pub fn succ(self) -> Self {
        Self::new(self.0 as i8 + 1)
    }
}

/// Les trois bassins de quarts d'un planning.
///
/// Enum fermé : un type de quart invalide est irreprésentable, il n'y a donc
/// pas d'erreur d'exécution associée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShiftKind {
    Midshift,
    Desk,
    Extra,
}

/// Identifiant fort pour Worker
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkerId(String);

impl WorkerId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Créneau hebdomadaire récurrent (heures militaires fractionnaires, 0–24).
///
/// Deux usages : le quart *canonique* vivant dans un bassin du [`Schedule`]
/// (capacité > 0, occupants mutables) et la *clé* transitoire servant à
/// désigner un créneau dans une requête ou une contrainte (capacité 0, jamais
/// placée dans un bassin). L'identité de créneau ([`Shift::same_slot`]) ne
/// compare que début/fin/jour, jamais la capacité ni les occupants, pour que
/// la clé retrouve le canonique.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shift {
    pub start: f64,
    pub end: f64,
    pub weekday: Weekday,
    /// Places restantes. Jamais négatif : la capacité est vérifiée avant
    /// toute décrémentation.
    pub spots: u32,
    /// Travailleurs affectés, dans l'ordre d'affectation.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub occupants: Vec<WorkerId>,
}

impl Shift {
    pub fn new(start: f64, end: f64, day: i8, spots: u32) -> Self {
        Self {
            start,
            end,
            weekday: Weekday::new(day),
            spots,
            occupants: Vec::new(),
        }
    }

    /// Clé de correspondance : capacité 0, aucun occupant.
    pub fn key(start: f64, end: f64, weekday: Weekday) -> Self {
        Self {
            start,
            end,
            weekday,
            spots: 0,
            occupants: Vec::new(),
        }
    }

    /// Même créneau horaire ? Capacité et occupants sont hors identité.
    pub fn same_slot(&self, other: &Shift) -> bool {
        self.start == other.start && self.end == other.end && self.weekday == other.weekday
    }

    pub fn is_open(&self) -> bool {
        self.spots > 0
    }

    /// Durée en heures, en passant minuit si nécessaire (23.75→6.00 = 6.25).
    pub fn duration_hours(&self) -> f64 {
        if self.end <= self.start {
            self.end + 24.0 - self.start
        } else {
            self.end - self.start
        }
    }

    /// Projection d'un quart canonique sur sa clé.
    pub fn slot_key(&self) -> Shift {
        Shift::key(self.start, self.end, self.weekday)
    }
}

/// Vœux d'un travailleur pour la semaine.
///
/// Les listes sont ordonnées : la position vaut priorité. Le moteur y ajoute
/// des contraintes dérivées après chaque midshift affecté (blocages dans
/// `unavailable`, créneau déclassé dans `secondary`) ; une passe ultérieure
/// sur les quarts desk/extra doit donc relire l'état courant, pas une copie.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Request {
    /// Créneaux où le travailleur ne doit jamais être placé.
    pub unavailable: Vec<Shift>,
    /// Préférences de midshift, par ordre de priorité.
    pub midshift_prefs: Vec<Shift>,
    pub preferred: Vec<Shift>,
    pub available: Vec<Shift>,
    /// Acceptable mais en dernier recours.
    pub secondary: Vec<Shift>,
    pub wants_midshift: bool,
    /// Volume horaire souhaité (indicatif, non imposé par le moteur).
    pub requested_hours: f64,
}

/// Travailleur à planifier.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    /// Rang explicite ; les passes trient dessus au lieu de se fier à l'ordre
    /// de la liste d'entrée.
    pub priority: u32,
    pub request: Request,
    pub assigned_hours: f64,
    /// Clés des créneaux occupés, dans l'ordre d'affectation.
    pub assigned_shifts: Vec<Shift>,
}

impl Worker {
    pub fn new<N: Into<String>>(name: N, priority: u32, request: Request) -> Self {
        Self {
            id: WorkerId::random(),
            name: name.into(),
            priority,
            request,
            assigned_hours: 0.0,
            assigned_shifts: Vec::new(),
        }
    }
}

/// Heures du midshift : 23h45 → 6h00, soit 6,25 h.
pub const MIDSHIFT_START: f64 = 23.75;
pub const MIDSHIFT_END: f64 = 6.0;
/// Places par midshift canonique.
pub const MIDSHIFT_SPOTS: u32 = 2;

/// Planning d'une semaine : bornes horaires et trois bassins de quarts.
///
/// Le bassin midshift est fabriqué à la construction — un canonique par jour,
/// capacité [`MIDSHIFT_SPOTS`] — et n'est jamais partagé entre deux plannings.
/// Les bassins desk/extra varient chaque semaine et sont fournis par
/// l'appelant (capacité 1 chacun).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schedule {
    pub min_hours: f64,
    pub max_hours: f64,
    pub midshifts: Vec<Shift>,
    pub desk_shifts: Vec<Shift>,
    pub extra_shifts: Vec<Shift>,
    /// Effectif total de la semaine.
    pub num_workers: usize,
}

impl Schedule {
    pub fn new(
        min_hours: f64,
        max_hours: f64,
        desk_shifts: Vec<Shift>,
        extra_shifts: Vec<Shift>,
        num_workers: usize,
    ) -> Self {
        let midshifts = (0..7)
            .map(|day| Shift::new(MIDSHIFT_START, MIDSHIFT_END, day, MIDSHIFT_SPOTS))
            .collect();
        Self {
            min_hours,
            max_hours,
            midshifts,
            desk_shifts,
            extra_shifts,
            num_workers,
        }
    }

    pub fn pool(&self, kind: ShiftKind) -> &[Shift] {
        match kind {
            ShiftKind::Midshift => &self.midshifts,
            ShiftKind::Desk => &self.desk_shifts,
            ShiftKind::Extra => &self.extra_shifts,
        }
    }

    pub(crate) fn pool_mut(&mut self, kind: ShiftKind) -> &mut Vec<Shift> {
        match kind {
            ShiftKind::Midshift => &mut self.midshifts,
            ShiftKind::Desk => &mut self.desk_shifts,
            ShiftKind::Extra => &mut self.extra_shifts,
        }
    }

    /// Premier quart canonique du bassin `kind` correspondant à la clé et
    /// encore ouvert. Lecture pure, aucun effet de bord.
    pub fn find_open_shift(&self, key: &Shift, kind: ShiftKind) -> Option<&Shift> {
        self.find_open_index(key, kind).map(|i| &self.pool(kind)[i])
    }

    pub(crate) fn find_open_index(&self, key: &Shift, kind: ShiftKind) -> Option<usize> {
        self.pool(kind)
            .iter()
            .position(|s| s.same_slot(key) && s.is_open())
    }
}
