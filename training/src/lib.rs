//! # Training
//!
//! Distance, mean speed and burnt calories for a finished training session.
//!
//! Distance is derived from the number of actions (steps or strokes):
//!
//! ```notrust
//! distance = action * STEP_LENGTH_M / METERS_PER_KM
//! speed    = distance / duration
//! ```
//!
//! Every formula takes duration in hours and returns kilometers, km/h or kcal.
//! Calorie formulas for each activity live in their own module together with
//! their coefficients.

mod activity;
mod locale;
mod report;
mod running;
mod swimming;
mod walking;

pub use activity::*;
pub use locale::*;
pub use report::*;
pub use running::running_spent_calories;
pub use swimming::{swimming_mean_speed, swimming_spent_calories};
pub use walking::walking_spent_calories;

/// Average length of a single step in meters
pub const STEP_LENGTH_M: f64 = 0.65;
/// Meters in one kilometer
pub const METERS_PER_KM: f64 = 1000.0;
/// Minutes in one hour
pub const MINUTES_PER_HOUR: f64 = 60.0;
/// Multiplier to convert km/h into m/s
pub const KMH_TO_MS: f64 = 0.278;
/// Centimeters in one meter
pub const CM_PER_M: f64 = 100.0;

/// Distance in kilometers covered by `action` steps or strokes.
#[inline]
pub fn distance(action: i64) -> f64 {
    action as f64 * STEP_LENGTH_M / METERS_PER_KM
}

/// Mean speed in km/h.
///
/// Zero `duration` gives zero speed.
///
/// # Params
/// - `action` - number of steps or strokes
/// - `duration` - duration of training in hours
#[inline]
pub fn mean_speed(action: i64, duration: f64) -> f64 {
    if duration == 0.0 {
        return 0.0;
    }

    distance(action) / duration
}
