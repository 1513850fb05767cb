use crate::{METERS_PER_KM, MINUTES_PER_HOUR, mean_speed};

const MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const MEAN_SPEED_SHIFT: f64 = 1.79;

/// Calories burnt while running.
///
/// ```notrust
/// ((18 * speed * 1.79) * weight / 1000) * duration * 60
/// ```
///
/// Division by `METERS_PER_KM` is a calibration constant of the formula, not
/// a distance conversion.
///
/// # Params
/// - `action` - number of steps
/// - `weight` - weight of person in kilograms
/// - `duration` - duration of training in hours
pub fn running_spent_calories(action: i64, weight: f64, duration: f64) -> f64 {
    let speed = mean_speed(action, duration);

    ((MEAN_SPEED_MULTIPLIER * speed * MEAN_SPEED_SHIFT) * weight / METERS_PER_KM)
        * duration
        * MINUTES_PER_HOUR
}
