use crate::METERS_PER_KM;

const MEAN_SPEED_SHIFT: f64 = 1.1;
const WEIGHT_MULTIPLIER: f64 = 2.0;

/// Mean speed in km/h based on pool laps.
///
/// Zero `duration` gives zero speed.
///
/// # Params
/// - `pool_length` - length of pool in meters
/// - `pool_count` - number of swum pool lengths
/// - `duration` - duration of training in hours
#[inline]
pub fn swimming_mean_speed(pool_length: i32, pool_count: i32, duration: f64) -> f64 {
    if duration == 0.0 {
        return 0.0;
    }

    let distance = f64::from(pool_length) * f64::from(pool_count) / METERS_PER_KM;

    distance / duration
}

/// Calories burnt while swimming.
///
/// ```notrust
/// (speed + 1.1) * 2 * weight * duration
/// ```
pub fn swimming_spent_calories(
    pool_length: i32,
    pool_count: i32,
    duration: f64,
    weight: f64,
) -> f64 {
    let speed = swimming_mean_speed(pool_length, pool_count, duration);

    (speed + MEAN_SPEED_SHIFT) * WEIGHT_MULTIPLIER * weight * duration
}
