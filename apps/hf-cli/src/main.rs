use clap::{Parser, Subcommand};
use hf_metrics::{
    validate_config, EngineConfig, MetricEngine, MetricInput, MetricReport, RawReading,
    RawSnapshot, SensorRole,
};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hf-cli")]
#[command(about = "Hygroflow CLI - derived climate metrics from raw sensor readings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an engine configuration file
    Validate {
        /// Path to the configuration YAML file
        config_path: PathBuf,
    },
    /// List the enabled metrics and their unit assignments
    Metrics {
        /// Path to the configuration YAML file
        config_path: PathBuf,
    },
    /// Evaluate all enabled metrics once from raw values
    Eval {
        /// Path to the configuration YAML file
        config_path: PathBuf,
        /// Indoor temperature, raw (e.g. "21.4" or "70 °F")
        #[arg(long)]
        indoor_temp: Option<String>,
        /// Indoor relative humidity, raw (e.g. "55" or "55 %")
        #[arg(long)]
        indoor_humidity: Option<String>,
        /// Outdoor temperature, raw
        #[arg(long)]
        outdoor_temp: Option<String>,
        /// Outdoor relative humidity, raw
        #[arg(long)]
        outdoor_humidity: Option<String>,
    },
    /// Stream evaluations from JSON-lines reading updates
    Run {
        /// Path to the configuration YAML file
        config_path: PathBuf,
        /// JSON-lines file of sensor updates; stdin when omitted
        readings_path: Option<PathBuf>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Invalid input line: {0}")]
    Input(#[from] serde_json::Error),

    #[error(transparent)]
    Metric(#[from] hf_metrics::MetricError),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Metrics { config_path } => cmd_metrics(&config_path),
        Commands::Eval {
            config_path,
            indoor_temp,
            indoor_humidity,
            outdoor_temp,
            outdoor_humidity,
        } => cmd_eval(
            &config_path,
            indoor_temp,
            indoor_humidity,
            outdoor_temp,
            outdoor_humidity,
        ),
        Commands::Run {
            config_path,
            readings_path,
        } => cmd_run(&config_path, readings_path.as_deref()),
    }
}

fn load_config(config_path: &Path) -> CliResult<EngineConfig> {
    let file = File::open(config_path)?;
    let config = serde_yaml::from_reader(file)?;
    Ok(config)
}

fn cmd_validate(config_path: &Path) -> CliResult<()> {
    println!("Validating configuration: {}", config_path.display());
    let config = load_config(config_path)?;
    validate_config(&config)?;
    println!("✓ Configuration is valid");
    Ok(())
}

fn cmd_metrics(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    validate_config(&config)?;

    println!("Enabled metrics:");
    for kind in &config.enabled_metrics {
        let unit = kind.unit().unwrap_or("-");
        let scope = if kind.requires_outdoor() {
            "indoor+outdoor"
        } else {
            "indoor"
        };
        println!("  {:<28} unit: {:<7} inputs: {}", kind.label(), unit, scope);
    }
    Ok(())
}

fn cmd_eval(
    config_path: &Path,
    indoor_temp: Option<String>,
    indoor_humidity: Option<String>,
    outdoor_temp: Option<String>,
    outdoor_humidity: Option<String>,
) -> CliResult<()> {
    let config = load_config(config_path)?;
    let mut engine = MetricEngine::new(&config)?;

    let raw_of = |text: Option<String>| text.map(RawReading::Text).unwrap_or_default();
    let snapshot = RawSnapshot {
        indoor_temperature: raw_of(indoor_temp),
        indoor_humidity: raw_of(indoor_humidity),
        outdoor_temperature: raw_of(outdoor_temp),
        outdoor_humidity: raw_of(outdoor_humidity),
    };

    let reports = engine.evaluate(&MetricInput::from_raw(&snapshot));
    println!("{}", report_line(&reports)?);
    Ok(())
}

fn cmd_run(config_path: &Path, readings_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let mut engine = MetricEngine::new(&config)?;

    let reader: Box<dyn BufRead> = match readings_path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    // Latest raw value per sensor id. Each input line updates some of
    // them and counts as one change notification.
    let mut store: HashMap<String, RawReading> = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let updates: HashMap<String, serde_json::Value> = serde_json::from_str(&line)?;
        for (sensor_id, value) in updates {
            store.insert(sensor_id, raw_from_json(value));
        }

        let snapshot = snapshot_from_store(&config, &store);
        let reports = engine.evaluate(&MetricInput::from_raw(&snapshot));
        tracing::debug!(metrics = reports.len(), "evaluated change notification");
        println!("{}", report_line(&reports)?);
    }

    Ok(())
}

/// Current raw value for each bound role, absent when the sensor has not
/// reported yet or is not bound at all.
fn snapshot_from_store(config: &EngineConfig, store: &HashMap<String, RawReading>) -> RawSnapshot {
    let fetch = |role: SensorRole| {
        config
            .sensor_for(role)
            .and_then(|id| store.get(id).cloned())
            .unwrap_or_default()
    };
    RawSnapshot {
        indoor_temperature: fetch(SensorRole::IndoorTemperature),
        indoor_humidity: fetch(SensorRole::IndoorHumidity),
        outdoor_temperature: fetch(SensorRole::OutdoorTemperature),
        outdoor_humidity: fetch(SensorRole::OutdoorHumidity),
    }
}

fn raw_from_json(value: serde_json::Value) -> RawReading {
    match value {
        serde_json::Value::String(text) => RawReading::Text(text),
        serde_json::Value::Number(n) => n.as_f64().map(RawReading::Value).unwrap_or_default(),
        _ => RawReading::Absent,
    }
}

/// One evaluation as a single JSON object keyed by metric id.
fn report_line(reports: &[MetricReport]) -> CliResult<String> {
    let mut object = serde_json::Map::new();
    for report in reports {
        object.insert(
            report.kind.key().to_string(),
            serde_json::to_value(report.value)?,
        );
    }
    Ok(serde_json::Value::Object(object).to_string())
}
