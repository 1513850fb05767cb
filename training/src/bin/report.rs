use std::{io::Write, path::PathBuf};

use training::{ActivityKind, ActivityReport, ActivitySample, Locale};

#[derive(Debug, serde::Deserialize)]
struct SessionCsv {
    action: i64,
    activity: String,
    duration: f64,
    weight: f64,
    height: Option<f64>,
    pool_length: Option<i32>,
    pool_count: Option<i32>,
}

#[derive(Debug, serde::Serialize)]
struct ReportCsv<'a> {
    activity: &'a str,
    duration: f64,
    distance: f64,
    speed: f64,
    calories: f64,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Language {
    #[default]
    Ru,
    En,
}

impl From<Language> for Locale {
    fn from(value: Language) -> Self {
        match value {
            Language::Ru => Locale::RU,
            Language::En => Locale::EN,
        }
    }
}

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Input csv file with sessions
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("input.csv"), required = false)]
    pub input: PathBuf,
    /// Output csv file. _Note_: will truncate old file if exists
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("output.csv"), required = false)]
    pub output: PathBuf,
    /// Labels and captions of activities
    #[arg(short, long, value_enum, default_value_t = Language::Ru)]
    locale: Language,
    /// Don't save changes
    #[arg(short, long, default_value_t = false, required = false)]
    pub dry: bool,
    /// Print summaries to stdout
    #[arg(short, long, default_value_t = false, required = false)]
    pub print: bool,
    /// Print reports as json lines to stdout
    #[arg(short, long, default_value_t = false, required = false)]
    pub json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();

    let Args {
        input,
        output,
        locale,
        dry,
        print,
        json,
    } = <Args as clap::Parser>::parse();

    let locale = Locale::from(locale);

    let mut rdr = csv::Reader::from_path(&input)
        .map_err(|e| format!("Failed to read input file. Reason: {e}"))?;

    let sessions = rdr
        .deserialize::<SessionCsv>()
        .enumerate()
        .filter_map(|(row, this)| match this {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(row, "skipping session: {e}");
                None
            }
        })
        .collect::<Vec<_>>();

    tracing::info!("Total: {} sessions", sessions.len());

    let mut wrt = match dry {
        true => None,
        false => Some(
            csv::Writer::from_path(&output)
                .map_err(|e| format!("Failed to create output file. Reason: {e}"))?,
        ),
    };

    let stdout = std::io::stdout();
    let mut io = stdout.lock();

    let mut unknown = 0;

    for SessionCsv {
        action,
        activity,
        duration,
        weight,
        height,
        pool_length,
        pool_count,
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

        let kind = ActivityKind::from_label(&locale, &activity);

        let Some(report) = ActivityReport::new(&kind, &sample) else {
            tracing::warn!(label = %activity, "unknown activity type");
            unknown += 1;

            if print {
                writeln!(io, "{}", locale.unknown)?;
            }

            continue;
        };

        if print {
            writeln!(io, "{}", report.localized(&locale))?;
        }

        if json {
            serde_json::to_writer(&mut io, &report)?;
            writeln!(io)?;
        }

        if let Some(wrt) = &mut wrt {
            wrt.serialize(ReportCsv {
                activity: &activity,
                duration: report.duration,
                distance: report.distance,
                speed: report.speed,
                calories: report.calories,
            })?;
        }
    }

    if unknown > 0 {
        tracing::warn!("{unknown} sessions with unknown activity type");
    }

    if let Some(mut wrt) = wrt {
        tracing::info!("Saving to {}", output.to_string_lossy());
        wrt.flush()?;
    }

    tracing::info!("Done!");

    Ok(())
}
