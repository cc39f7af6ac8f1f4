use std::path::PathBuf;

use anyhow::{bail, Result};
use breathwatch::report::{self, OutputFormat};
use breathwatch::{App, AppConfig, FileSource, ReadingSource, StaticSource};
use breathwatch_core::FileStore;
use breathwatch_types::{AsthmaSeverity, EnvironmentalReading, HealthProfile, PollenLevel};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "breathwatch", version)]
#[command(about = "Asthma risk checker and seven-day temperature log")]
struct Cli {
    /// Path to a TOML config file (default: breathwatch.toml, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for stored profile and temperature data
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score the current asthma risk
    Assess(AssessArgs),

    /// Record and review daily temperatures
    #[command(subcommand)]
    Temp(TempCommand),

    /// Show or edit the health profile
    #[command(subcommand)]
    Profile(ProfileCommand),
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// JSON file holding an environmental reading
    #[arg(short, long, conflicts_with_all = ["aqi", "pollen", "humidity", "temperature"])]
    reading: Option<PathBuf>,

    /// Air Quality Index
    #[arg(long, allow_negative_numbers = true)]
    aqi: Option<i32>,

    /// Pollen level: low, moderate, high or "very high"
    #[arg(long)]
    pollen: Option<PollenLevel>,

    /// Relative humidity in percent
    #[arg(long, allow_negative_numbers = true)]
    humidity: Option<f64>,

    /// Air temperature in °C
    #[arg(long, allow_negative_numbers = true)]
    temperature: Option<f64>,

    /// Ignore the saved health profile
    #[arg(long)]
    no_profile: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl AssessArgs {
    fn source(&self) -> Option<Box<dyn ReadingSource>> {
        if let Some(path) = &self.reading {
            return Some(Box::new(FileSource::new(path)));
        }
        if self.aqi.is_none()
            && self.pollen.is_none()
            && self.humidity.is_none()
            && self.temperature.is_none()
        {
            return None;
        }

        // Unspecified conditions fall back to the builder's comfortable defaults
        let mut builder = EnvironmentalReading::builder();
        if let Some(aqi) = self.aqi {
            builder = builder.air_quality_index(aqi);
        }
        if let Some(pollen) = self.pollen {
            builder = builder.pollen_level(pollen);
        }
        if let Some(humidity) = self.humidity {
            builder = builder.humidity(humidity);
        }
        if let Some(temperature) = self.temperature {
            builder = builder.temperature(temperature);
        }
        Some(Box::new(StaticSource::new(builder.build())))
    }
}

#[derive(Subcommand, Debug)]
enum TempCommand {
    /// Record a temperature in °C
    Record {
        #[arg(allow_negative_numbers = true)]
        celsius: f64,

        /// Date to record against (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show the last seven days with extremes
    History {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Classify a temperature without recording it
    Classify {
        #[arg(allow_negative_numbers = true)]
        celsius: f64,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Show the saved profile
    Show {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Replace the saved profile
    Set {
        /// mild, moderate or severe
        #[arg(long)]
        severity: AsthmaSeverity,

        /// Known trigger, e.g. "Pollen", "Air Pollution", "Cold Air" (repeatable)
        #[arg(long = "trigger")]
        triggers: Vec<String>,

        /// Daily controller medication (repeatable)
        #[arg(long = "medication")]
        medications: Vec<String>,
    },

    /// Delete the saved profile
    Clear,
}

fn init_logging(verbose: bool, configured: Option<&str>) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or("warn")))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    init_logging(cli.verbose, config.log_filter.as_deref());
    tracing::debug!(data_dir = %config.data_dir.display(), "configuration loaded");

    let app = App::open(&config);
    match cli.command {
        Command::Assess(args) => run_assess(&app, &args),
        Command::Temp(command) => run_temp(&app, command),
        Command::Profile(command) => run_profile(&app, command),
    }
}

fn run_assess(app: &App<FileStore>, args: &AssessArgs) -> Result<()> {
    let mut source = args.source();
    let report = app.assess(
        source.as_deref_mut().map(|s| s as &mut dyn ReadingSource),
        !args.no_profile,
    );

    match args.format {
        OutputFormat::Text => print!("{}", report::render_assessment(&report)),
        OutputFormat::Json => println!("{}", report::to_json(&report)?),
    }
    Ok(())
}

fn run_temp(app: &App<FileStore>, command: TempCommand) -> Result<()> {
    match command {
        TempCommand::Record { celsius, date } => {
            let history = app.record_temperature(date, celsius)?;
            println!(
                "Recorded {}°C ({} day(s) stored)",
                celsius,
                history.len()
            );
            if let Some(classification) = app.classify(celsius) {
                print!("{}", report::render_classification(celsius, &classification));
            }
        }
        TempCommand::History { format } => {
            let summary = app.temperature_summary();
            match format {
                OutputFormat::Text => print!("{}", report::render_temperature_summary(&summary)),
                OutputFormat::Json => println!("{}", report::to_json(&summary)?),
            }
        }
        TempCommand::Classify { celsius, format } => {
            let Some(classification) = app.classify(celsius) else {
                bail!("Cannot classify {}", celsius);
            };
            match format {
                OutputFormat::Text => {
                    print!("{}", report::render_classification(celsius, &classification))
                }
                OutputFormat::Json => println!("{}", report::to_json(&classification)?),
            }
        }
    }
    Ok(())
}

fn run_profile(app: &App<FileStore>, command: ProfileCommand) -> Result<()> {
    match command {
        ProfileCommand::Show { format } => {
            let profile = app.profile();
            match format {
                OutputFormat::Text => print!("{}", report::render_profile(profile.as_ref())),
                OutputFormat::Json => println!("{}", report::to_json(&profile)?),
            }
        }
        ProfileCommand::Set {
            severity,
            triggers,
            medications,
        } => {
            let profile = triggers
                .into_iter()
                .fold(HealthProfile::new(severity), HealthProfile::with_trigger);
            let profile = medications
                .into_iter()
                .fold(profile, HealthProfile::with_medication);
            app.save_profile(&profile)?;
            print!("{}", report::render_profile(Some(&profile)));
        }
        ProfileCommand::Clear => {
            app.clear_profile()?;
            println!("Health profile cleared.");
        }
    }
    Ok(())
}
