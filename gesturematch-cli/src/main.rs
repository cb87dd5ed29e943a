use clap::Parser;
use gesturematch::{
    convert_points, AcceptancePolicy, CloudParams, InputPoint, Recognizer, RecognizerConfig,
    Verdict,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "GestureMatch CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RecognizerConfigJson {
    num_points: usize,
    lut_size: usize,
    max_int_coord: u32,
    parallel: bool,
}

impl Default for RecognizerConfigJson {
    fn default() -> Self {
        let cloud = CloudParams::default();
        Self {
            num_points: cloud.num_points,
            lut_size: cloud.lut_size,
            max_int_coord: cloud.max_int_coord,
            parallel: false,
        }
    }
}

impl From<&RecognizerConfigJson> for RecognizerConfig {
    fn from(value: &RecognizerConfigJson) -> Self {
        Self {
            cloud: CloudParams {
                num_points: value.num_points,
                lut_size: value.lut_size,
                max_int_coord: value.max_int_coord,
            },
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GestureJson {
    #[serde(default)]
    name: String,
    #[serde(default)]
    points: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    threshold: f64,
    output_path: Option<String>,
    recognizer: RecognizerConfigJson,
    templates: Vec<GestureJson>,
    strokes: Vec<GestureJson>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: AcceptancePolicy::default().threshold,
            output_path: None,
            recognizer: RecognizerConfigJson::default(),
            templates: Vec::new(),
            strokes: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ClosestRecord {
    name: String,
    score: f64,
}

#[derive(Debug, Serialize)]
struct SkippedRecord {
    name: String,
    reason: String,
}

#[derive(Debug, Serialize)]
struct StrokeRecord {
    label: String,
    name: Option<String>,
    score: f64,
    accepted: bool,
    reason: Option<String>,
    closest: Option<ClosestRecord>,
    distance: Option<f64>,
    elapsed_ms: f64,
    discarded: usize,
}

#[derive(Debug, Serialize)]
struct Output {
    templates_loaded: usize,
    templates_skipped: Vec<SkippedRecord>,
    results: Vec<StrokeRecord>,
}

fn to_input_point(value: &Value) -> InputPoint {
    match value {
        Value::Object(map) => InputPoint::Object {
            x: map.get("x").and_then(Value::as_f64),
            y: map.get("y").and_then(Value::as_f64),
        },
        Value::Array(items) => items
            .iter()
            .map(Value::as_f64)
            .collect::<Option<Vec<f64>>>()
            .map_or(InputPoint::Malformed, InputPoint::Pair),
        _ => InputPoint::Malformed,
    }
}

fn to_input_points(values: &[Value]) -> Vec<InputPoint> {
    values.iter().map(to_input_point).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("gesturematch=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.templates.is_empty() {
        return Err("at least one template must be set in the config".into());
    }
    if !(0.0..=1.0).contains(&config.threshold) {
        return Err("threshold must lie in [0, 1]".into());
    }

    let mut recognizer = Recognizer::with_config((&config.recognizer).into())?;
    let mut skipped = Vec::new();
    for template in &config.templates {
        let conv = convert_points(&to_input_points(&template.points));
        if conv.discarded > 0 {
            tracing::warn!(
                template = template.name.as_str(),
                discarded = conv.discarded,
                "skipping malformed template points"
            );
        }
        if let Err(err) = recognizer.add_template(&template.name, &conv.points) {
            tracing::warn!(template = template.name.as_str(), %err, "template skipped");
            skipped.push(SkippedRecord {
                name: template.name.clone(),
                reason: err.to_string(),
            });
        }
    }

    let policy = AcceptancePolicy::new(config.threshold);
    let mut results = Vec::with_capacity(config.strokes.len());
    for stroke in &config.strokes {
        let conv = convert_points(&to_input_points(&stroke.points));
        let result = recognizer.recognize(&conv.points);
        let (distance, elapsed_ms) = match &result {
            Ok(m) => (Some(m.distance), m.elapsed.as_secs_f64() * 1000.0),
            Err(_) => (None, 0.0),
        };
        let record = match policy.judge(&result) {
            Verdict::Accepted { name, score } => StrokeRecord {
                label: stroke.name.clone(),
                name: Some(name),
                score,
                accepted: true,
                reason: None,
                closest: None,
                distance,
                elapsed_ms,
                discarded: conv.discarded,
            },
            Verdict::Rejected(rejection) => StrokeRecord {
                label: stroke.name.clone(),
                name: None,
                score: 0.0,
                accepted: false,
                reason: Some(rejection.reason.to_string()),
                closest: rejection
                    .closest
                    .map(|(name, score)| ClosestRecord { name, score }),
                distance,
                elapsed_ms,
                discarded: conv.discarded,
            },
        };
        results.push(record);
    }

    let output = Output {
        templates_loaded: recognizer.len(),
        templates_skipped: skipped,
        results,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
