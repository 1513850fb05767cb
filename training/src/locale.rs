/// Labels recognized as activity types and captions used in the summary.
///
/// Labels are matched exactly, without case folding or trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub running: &'static str,
    pub walking: &'static str,
    pub swimming: &'static str,
    /// Returned instead of a summary when label isn't recognized
    pub unknown: &'static str,
    pub captions: Captions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captions {
    pub kind: &'static str,
    pub duration: &'static str,
    pub duration_unit: &'static str,
    pub distance: &'static str,
    pub distance_unit: &'static str,
    pub speed: &'static str,
    pub speed_unit: &'static str,
    pub calories: &'static str,
    /// Empty unit is omitted together with its separator
    pub calories_unit: &'static str,
}

impl Locale {
    pub const RU: Self = Self {
        running: "Бег",
        walking: "Ходьба",
        swimming: "Плавание",
        unknown: "неизвестный тип тренировки",
        captions: Captions {
            kind: "Тип тренировки",
            duration: "Длительность",
            duration_unit: "ч.",
            distance: "Дистанция",
            distance_unit: "км.",
            speed: "Скорость",
            speed_unit: "км/ч",
            calories: "Сожгли калорий",
            calories_unit: "",
        },
    };

    pub const EN: Self = Self {
        running: "Running",
        walking: "Walking",
        swimming: "Swimming",
        unknown: "unknown activity type",
        captions: Captions {
            kind: "Activity type",
            duration: "Duration",
            duration_unit: "h.",
            distance: "Distance",
            distance_unit: "km.",
            speed: "Speed",
            speed_unit: "km/h",
            calories: "Calories burnt",
            calories_unit: "kcal",
        },
    };
}

impl Default for Locale {
    fn default() -> Self {
        Self::RU
    }
}
