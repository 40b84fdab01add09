use clap::{Parser, Subcommand};
use ocr_prep::output::{OutputFormat, DEFAULT_QUALITY};
use ocr_prep::ColorValue;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod batch;
mod config;

#[derive(Parser, Debug)]
#[command(name = "ocr-prep")]
#[command(about = "Prepare images for OCR and work with RGB colors")]
#[command(version)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rotate, grayscale, adjust contrast and binarize images
    Ocr(OcrArgs),

    /// Parse, blend and adjust hex colors
    #[command(subcommand)]
    Color(ColorCommand),
}

#[derive(clap::Args, Debug)]
pub struct OcrArgs {
    /// Image files to prepare
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory prepared images are written to
    #[arg(long, env = "OCR_PREP_OUT_DIR", default_value = "prepared")]
    pub out_dir: PathBuf,

    /// Output format (png, jpeg, webp)
    #[arg(long, env = "OCR_PREP_FORMAT", default_value = "png")]
    pub format: OutputFormat,

    /// Encoder quality, used by JPEG output
    #[arg(
        long,
        env = "OCR_PREP_QUALITY",
        default_value_t = DEFAULT_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub quality: u8,

    /// Tilt correction in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub tilt: f32,

    /// Contrast factor (1.0 leaves contrast unchanged)
    #[arg(
        long,
        env = "OCR_PREP_CONTRAST",
        default_value_t = 1.4,
        allow_hyphen_values = true
    )]
    pub contrast: f32,

    /// Brightness threshold for binarization
    #[arg(long, env = "OCR_PREP_THRESHOLD", default_value_t = 128)]
    pub threshold: u8,

    /// Stop after the contrast step
    #[arg(long)]
    pub no_binarize: bool,
}

#[derive(Subcommand, Debug)]
pub enum ColorCommand {
    /// Normalize a hex color to #rrggbb
    Hex { color: ColorValue },

    /// Blend two colors
    Mix {
        from: ColorValue,
        to: ColorValue,

        /// 0.0 keeps FROM, 1.0 gives TO
        #[arg(long, default_value_t = 0.5)]
        ratio: f64,
    },

    /// Shift channels, saturating at 0 and 255
    Adjust {
        color: ColorValue,

        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        red: i32,

        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        green: i32,

        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        blue: i32,
    },

    /// Print a random color
    Random,
}

fn run_color(command: ColorCommand) -> anyhow::Result<ColorValue> {
    let color = match command {
        ColorCommand::Hex { color } => color,
        ColorCommand::Mix { from, to, ratio } => from.mix_with(to, ratio)?,
        ColorCommand::Adjust {
            color,
            red,
            green,
            blue,
        } => color.increase_all(red, green, blue),
        ColorCommand::Random => ColorValue::random(),
    };
    Ok(color)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        Command::Ocr(ocr_args) => {
            let config = config::Config::from(ocr_args);

            tracing::info!("Starting ocr-prep v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!(
                "Preparing {} image(s) into {}",
                config.inputs.len(),
                config.out_dir.display()
            );

            let report = batch::run(&config)?;
            println!("{}", serde_json::to_string_pretty(&report)?);

            if !report.failed.is_empty() {
                anyhow::bail!(
                    "{} of {} image(s) failed",
                    report.failed.len(),
                    config.inputs.len()
                );
            }
        }
        Command::Color(command) => {
            println!("{}", run_color(command)?);
        }
    }

    Ok(())
}
