use training::{ActivitySample, Locale, format_report};

const TOLERANCE: f64 = 1e-4;

#[derive(Debug, serde::Deserialize)]
struct SessionCsv {
    action: i64,
    activity: String,
    duration: f64,
    weight: f64,
    height: Option<f64>,
    pool_length: Option<i32>,
    pool_count: Option<i32>,
    distance: Option<f64>,
    speed: Option<f64>,
    calories: Option<f64>,
}

fn sessions() -> Vec<SessionCsv> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/sessions.csv");

    csv::Reader::from_path(path)
        .expect("fixture exists")
        .deserialize()
        .collect::<Result<Vec<_>, _>>()
        .expect("fixture is valid")
}

#[test]
fn reports_match_fixture() {
    let sessions = sessions();
    assert!(!sessions.is_empty());

    for SessionCsv {
        action,
        activity,
        duration,
        weight,
        height,
        pool_length,
        pool_count,
        distance,
        speed,
        calories,
    } in sessions
    {
        let sample = ActivitySample {
            action,
            duration,
            weight,
            height: height.unwrap_or_default(),
            pool_length: pool_length.unwrap_or_default(),
            pool_count: pool_count.unwrap_or_default(),
        };

        let report = sample.report(&activity, &Locale::RU);

        match (report, distance, speed, calories) {
            (Some(report), Some(distance), Some(speed), Some(calories)) => {
                assert!((report.distance - distance).abs() < TOLERANCE, "{activity}: {report:?}");
                assert!((report.speed - speed).abs() < TOLERANCE, "{activity}: {report:?}");
                assert!((report.calories - calories).abs() < TOLERANCE, "{activity}: {report:?}");
            }
            (None, None, None, None) => {}
            (report, ..) => panic!("{activity}: unexpected {report:?}"),
        }
    }
}

#[test]
fn summary_for_every_session() {
    for SessionCsv {
        action,
        activity,
        duration,
        weight,
        height,
        pool_length,
        pool_count,
        calories,
        ..
    } in sessions()
    {
        let summary = format_report(
            action,
            &activity,
            duration,
            weight,
            height.unwrap_or_default(),
            pool_length.unwrap_or_default(),
            pool_count.unwrap_or_default(),
        );

        match calories {
            Some(_) => {
                assert!(summary.starts_with(&format!("Тип тренировки: {activity}\n")));
                assert_eq!(summary.lines().count(), 5);
            }
            None => assert_eq!(summary, Locale::RU.unknown),
        }
    }
}
