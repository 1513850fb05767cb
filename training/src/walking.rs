use crate::{CM_PER_M, KMH_TO_MS, MINUTES_PER_HOUR, mean_speed};

const WEIGHT_MULTIPLIER: f64 = 0.035;
const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Calories burnt while walking.
///
/// ```notrust
/// ((0.035 * weight) + (speed^2 / height) * 0.029 * weight) * duration * 60
/// ```
///
/// where `speed` is in m/s and `height` in meters.
///
/// `height` isn't checked: zero height yields infinity (or NaN when speed is
/// zero as well).
///
/// # Params
/// - `action` - number of steps
/// - `duration` - duration of training in hours
/// - `weight` - weight of person in kilograms
/// - `height` - height of person in centimeters
pub fn walking_spent_calories(action: i64, duration: f64, weight: f64, height: f64) -> f64 {
    let speed = mean_speed(action, duration) * KMH_TO_MS;

    ((WEIGHT_MULTIPLIER * weight)
        + (speed.powi(2) / (height / CM_PER_M)) * SPEED_HEIGHT_MULTIPLIER * weight)
        * duration
        * MINUTES_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_thousand_steps() {
        // speed: 3.25 km/h -> 0.9035 m/s
        let expected = ((0.035 * 75.0) + (0.9035_f64.powi(2) / 1.75) * 0.029 * 75.0) * 60.0;

        let actual = walking_spent_calories(5000, 1.0, 75.0, 175.0);

        assert!((expected - actual).abs() < 1e-9, "{actual}");
        assert!((actual - 218.37357).abs() < 1e-4, "{actual}");
    }

    #[test]
    fn standing_still_burns_base_rate() {
        let expected = 0.035 * 70.0 * 2.0 * 60.0;

        let actual = walking_spent_calories(0, 2.0, 70.0, 180.0);

        assert!((expected - actual).abs() < 1e-9);
    }

    #[test]
    fn zero_height_is_infinite() {
        let actual = walking_spent_calories(5000, 1.0, 75.0, 0.0);

        assert!(!actual.is_finite());
        assert!(actual.is_infinite());
    }

    #[test]
    fn zero_height_without_movement_is_nan() {
        let actual = walking_spent_calories(0, 1.0, 75.0, 0.0);

        assert!(actual.is_nan());
    }

    #[test]
    fn zero_duration() {
        assert_eq!(walking_spent_calories(5000, 0.0, 75.0, 175.0), 0.0);
    }
}
