use std::path::PathBuf;

use clap::Parser;
use tlu_mask::config::Config;
use tlu_mask::report::{MaskReport, OutputFormat};
use tlu_mask::TriggerPattern;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[clap(version, about)]
pub struct Args {
    /// Trigger configuration, one of 1, 0 or X per signal line.
    /// The first character is signal line 0.
    #[clap(value_name = "TRIGGER_CONFIG")]
    trigger_config: String,

    #[clap(short, long, env = "TLU_MASK_CONFIG")]
    config: Option<PathBuf>,

    /// Overrides the configured output format.
    #[clap(short, long)]
    format: Option<OutputFormat>,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut settings = config::Config::builder();

    if let Some(path) = args.config {
        settings = settings.add_source(config::File::from(path).required(true));
    }

    let settings = settings
        .add_source(
            config::Environment::with_prefix("TLU_MASK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config = settings.try_deserialize::<Config>()?;
    let format = args.format.unwrap_or(config.output.format);

    let pattern: TriggerPattern = args.trigger_config.parse()?;

    tracing::debug!(
        %pattern,
        required_present = pattern.required_present(),
        required_absent = pattern.required_absent(),
        "Decoded trigger configuration"
    );

    let mask = pattern.enumerate();

    tracing::info!(
        matches = mask.count_ones(),
        width = pattern.width(),
        "Trigger mask calculated"
    );

    let report = MaskReport::new(&pattern, &mask);

    println!("{}", report.render(format)?);

    Ok(())
}
