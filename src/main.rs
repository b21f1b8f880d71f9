use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unitconv::config::{Config, OutputFormat};
use unitconv::convert::{self, Converter};
use unitconv::http;
use unitconv::units::UnitCategory;

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Unit conversion function and its request adapter", long_about = None)]
struct Cli {
    /// Config file (default: ./unitconv.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units
    Convert {
        /// Source unit name (e.g., "millimeter")
        source: String,

        /// Target unit name (e.g., "meter")
        target: String,

        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        input: f64,

        /// Unit category
        #[arg(long, default_value = "length")]
        category: String,
    },

    /// Serve a request path the way the hosted function would
    Get {
        /// Request path (e.g., "/length/kilometer/meter/1")
        path: String,
    },

    /// List the units of a category
    Units {
        /// Unit category (default: all)
        category: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let outcome = match cli.command {
        Commands::Convert {
            source,
            target,
            input,
            category,
        } => convert_units(&category, &source, &target, input, format),
        Commands::Get { path } => get_path(&path, format),
        Commands::Units { category } => list_units(category.as_deref(), format),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn resolve_category(segment: &str) -> Result<UnitCategory, Box<dyn std::error::Error>> {
    UnitCategory::from_segment(segment)
        .ok_or_else(|| format!("Unit category '{}' not found", segment).into())
}

/// Returns Ok(false) when a unit name was not found
fn convert_units(
    category: &str,
    source: &str,
    target: &str,
    input: f64,
    format: OutputFormat,
) -> Result<bool, Box<dyn std::error::Error>> {
    let category = resolve_category(category)?;
    let result = Converter::new(category).convert(source, target, input);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => match convert::not_found_message(category, &result) {
            None => {
                let value = result.value().unwrap_or_default();
                println!("{}", convert::format_value(value));
            }
            Some(message) => eprintln!("{}", message),
        },
    }

    Ok(result.is_success())
}

/// Returns Ok(false) for any non-200 response
fn get_path(path: &str, format: OutputFormat) -> Result<bool, Box<dyn std::error::Error>> {
    let response = http::handle(path);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => println!("{}", response),
    }

    Ok(response.is_success())
}

fn list_units(
    category: Option<&str>,
    format: OutputFormat,
) -> Result<bool, Box<dyn std::error::Error>> {
    let categories = match category {
        Some(segment) => vec![resolve_category(segment)?],
        None => UnitCategory::all().to_vec(),
    };

    match format {
        OutputFormat::Json => {
            let listing: serde_json::Map<String, serde_json::Value> = categories
                .iter()
                .map(|c| {
                    let units = c
                        .table()
                        .entries()
                        .iter()
                        .map(|entry| {
                            serde_json::json!({
                                "name": entry.name,
                                "factor": entry.factor,
                            })
                        })
                        .collect();
                    (c.segment().to_string(), serde_json::Value::Array(units))
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Text => {
            for c in &categories {
                println!("{} (base: {}):", c.label(), c.base_unit());
                for entry in c.table().entries() {
                    println!("  - {} = {} {}", entry.name, entry.factor, c.base_unit());
                }
            }
        }
    }

    Ok(true)
}
