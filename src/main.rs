use clap::{Parser, Subcommand};
use clampscale::clamp;
use clampscale::units::{CssUnit, RootFontSize};

#[derive(Parser)]
#[command(name = "clampscale")]
#[command(about = "Generate and parse fluid CSS clamp() expressions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a clamp() expression
    Generate {
        /// Value at the minimum device width (e.g., "1")
        #[arg(long)]
        min: Option<String>,

        /// Value at the maximum device width (e.g., "2.5")
        #[arg(long)]
        max: Option<String>,

        /// Unit of the values (rem, px, em)
        #[arg(short, long)]
        unit: Option<CssUnit>,

        /// Device width (px) where scaling starts
        #[arg(long)]
        min_device: Option<f64>,

        /// Device width (px) where scaling stops
        #[arg(long)]
        max_device: Option<f64>,

        /// Root font size mode (standard = 16px, simplified = 10px)
        #[arg(short, long)]
        root: Option<RootFontSize>,

        /// Emit rem instead of px
        #[arg(long)]
        convert_to_rem: bool,

        /// TOML file with a base config; flags override its fields
        #[arg(short, long)]
        config: Option<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recover the config behind a clamp() expression
    Parse {
        /// clamp() expression (e.g., "clamp(1rem, 2.294vw + 0.541rem, 2.5rem)")
        text: String,

        /// Root font size mode (standard = 16px, simplified = 10px)
        #[arg(short, long, default_value = "standard")]
        root: RootFontSize,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether text has the clamp() shape
    Check {
        text: String,
    },

    /// Print the default config as JSON
    Defaults,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            min,
            max,
            unit,
            min_device,
            max_device,
            root,
            convert_to_rem,
            config,
            json,
        } => load_config(config.as_deref()).and_then(|mut base| {
            if let Some(min) = min {
                base.min_value = min;
            }
            if let Some(max) = max {
                base.max_value = max;
            }
            if let Some(unit) = unit {
                base.unit = unit;
            }
            if let Some(width) = min_device {
                base.min_device_width = width;
            }
            if let Some(width) = max_device {
                base.max_device_width = width;
            }
            if let Some(root) = root {
                base.root_font_size = root;
            }
            base.convert_px_to_rem |= convert_to_rem;
            generate(&base, json)
        }),
        Commands::Parse { text, root, json } => parse(&text, root, json),
        Commands::Check { text } => {
            println!("{}", clamp::is_clamp_function(&text));
            Ok(())
        }
        Commands::Defaults => print_defaults(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> Result<clamp::ScaleConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => clamp::ScaleConfig::load_from_file(path)
            .map_err(|e| format!("Failed to load config '{}': {}", path, e).into()),
        None => Ok(clamp::default_config()),
    }
}

fn generate(config: &clamp::ScaleConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Form-level issues are advisory here; the calculation has the final say
    let validation = clamp::validate_config(config);
    if validation.has_issues() {
        eprintln!("{}", validation);
    }

    let result = clamp::calculate_clamp(config);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_valid {
        println!("{}", result.result);
    }

    match result.error_message {
        Some(message) if !result.is_valid => Err(message.into()),
        _ => Ok(()),
    }
}

fn parse(text: &str, root: RootFontSize, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = clamp::parse_clamp_function(text, root);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(config) = &result.config {
        println!("Root font size: {}", config.root_font_size);
        println!(
            "Device widths: {}px - {}px",
            config.min_device_width, config.max_device_width
        );
        println!(
            "Values: {}{} - {}{}",
            config.min_value, config.unit, config.max_value, config.unit
        );
    }

    match result.error_message {
        Some(message) if !result.is_valid => Err(message.into()),
        _ => Ok(()),
    }
}

fn print_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(&clamp::default_config())?;
    println!("{}", json);
    Ok(())
}
