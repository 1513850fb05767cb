use crate::{ActivityReport, Locale};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
    /// Label which doesn't match any known activity
    Unknown(String),
}

impl ActivityKind {
    pub fn from_label(locale: &Locale, label: &str) -> Self {
        if label == locale.running {
            return Self::Running;
        }

        if label == locale.walking {
            return Self::Walking;
        }

        if label == locale.swimming {
            return Self::Swimming;
        }

        Self::Unknown(label.to_owned())
    }

    pub fn label<'a>(&'a self, locale: &Locale) -> &'a str {
        match self {
            Self::Running => locale.running,
            Self::Walking => locale.walking,
            Self::Swimming => locale.swimming,
            Self::Unknown(label) => label,
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

/// Raw counters of a single training session.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivitySample {
    /// Number of steps or strokes
    pub action: i64,
    /// Duration in hours
    pub duration: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Height in centimeters. Used for walking only
    pub height: f64,
    /// Pool length in meters. Used for swimming only
    pub pool_length: i32,
    /// Number of swum pool lengths. Used for swimming only
    pub pool_count: i32,
}

impl ActivitySample {
    /// Resolve `label` with `locale` and calculate report for it.
    ///
    /// Returns `None` if label isn't a known activity.
    pub fn report(&self, label: &str, locale: &Locale) -> Option<ActivityReport> {
        ActivityReport::new(&ActivityKind::from_label(locale, label), self)
    }
}
