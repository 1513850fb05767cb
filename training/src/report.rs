use std::fmt;

use crate::{
    ActivityKind, ActivitySample, Locale, distance, mean_speed, running_spent_calories,
    swimming_mean_speed, swimming_spent_calories, walking_spent_calories,
};

/// Summary of a single training session.
///
/// Swimming distance is calculated from `action` with step length, the same
/// as for running and walking, while speed comes from pool laps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityReport {
    pub kind: ActivityKind,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// km/h
    pub speed: f64,
    /// kcal
    pub calories: f64,
}

impl ActivityReport {
    /// Calculate report for `sample`. Returns `None` for [`ActivityKind::Unknown`].
    pub fn new(kind: &ActivityKind, sample: &ActivitySample) -> Option<Self> {
        let ActivitySample {
            action,
            duration,
            weight,
            height,
            pool_length,
            pool_count,
        } = *sample;

        let (speed, calories) = match kind {
            ActivityKind::Running => (
                mean_speed(action, duration),
                running_spent_calories(action, weight, duration),
            ),
            ActivityKind::Walking => (
                mean_speed(action, duration),
                walking_spent_calories(action, duration, weight, height),
            ),
            ActivityKind::Swimming => (
                swimming_mean_speed(pool_length, pool_count, duration),
                swimming_spent_calories(pool_length, pool_count, duration, weight),
            ),
            ActivityKind::Unknown(_) => return None,
        };

        Some(Self {
            kind: kind.clone(),
            duration,
            distance: distance(action),
            speed,
            calories,
        })
    }

    pub const fn localized<'a>(&'a self, locale: &'a Locale) -> LocalizedReport<'a> {
        LocalizedReport {
            report: self,
            locale,
        }
    }

    pub fn render(&self, locale: &Locale) -> String {
        self.localized(locale).to_string()
    }
}

impl fmt::Display for ActivityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.localized(&Locale::default()), f)
    }
}

/// [`ActivityReport`] rendered with captions of a [`Locale`].
#[derive(Debug, Clone, Copy)]
pub struct LocalizedReport<'a> {
    report: &'a ActivityReport,
    locale: &'a Locale,
}

impl fmt::Display for LocalizedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { report, locale } = self;
        let captions = &locale.captions;

        writeln!(f, "{}: {}", captions.kind, report.kind.label(locale))?;
        line(f, captions.duration, report.duration, captions.duration_unit)?;
        line(f, captions.distance, report.distance, captions.distance_unit)?;
        line(f, captions.speed, report.speed, captions.speed_unit)?;
        line(f, captions.calories, report.calories, captions.calories_unit)
    }
}

fn line(f: &mut fmt::Formatter<'_>, caption: &str, value: f64, unit: &str) -> fmt::Result {
    match unit.is_empty() {
        true => writeln!(f, "{caption}: {value:.2}"),
        false => writeln!(f, "{caption}: {value:.2} {unit}"),
    }
}

/// Summary of training with default labels.
///
/// Returns [`Locale::unknown`] marker when `kind` isn't a known activity label.
///
/// # Params
/// - `action` - number of steps or strokes
/// - `kind` - activity label e.g. `Бег`, `Ходьба` or `Плавание`
/// - `duration` - duration of training in hours
/// - `weight` - weight of person in kilograms
/// - `height` - height of person in centimeters
/// - `pool_length` - length of pool in meters
/// - `pool_count` - number of swum pool lengths
pub fn format_report(
    action: i64,
    kind: &str,
    duration: f64,
    weight: f64,
    height: f64,
    pool_length: i32,
    pool_count: i32,
) -> String {
    format_report_with(
        &Locale::default(),
        action,
        kind,
        duration,
        weight,
        height,
        pool_length,
        pool_count,
    )
}

/// Same as [`format_report`] with labels and captions of `locale`.
#[allow(clippy::too_many_arguments)]
pub fn format_report_with(
    locale: &Locale,
    action: i64,
    kind: &str,
    duration: f64,
    weight: f64,
    height: f64,
    pool_length: i32,
    pool_count: i32,
) -> String {
    let sample = ActivitySample {
        action,
        duration,
        weight,
        height,
        pool_length,
        pool_count,
    };

    match sample.report(kind, locale) {
        Some(report) => report.render(locale),
        None => {
            tracing::debug!(label = kind, "unknown activity type");

            locale.unknown.to_owned()
        }
    }
}
