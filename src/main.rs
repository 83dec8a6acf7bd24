use clap::Parser;
use polysoundex::{EncoderConfig, PhoneticEncoder};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "polysoundex")]
#[command(about = "Multi-script Soundex - phonetic codes for names", long_about = None)]
struct Args {
    /// TOML script configuration (defaults to $POLYSOUNDEX_CONFIG, then built-in presets)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Names to encode
    #[arg(required = true)]
    names: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polysoundex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let encoder = match args.config {
        Some(path) => EncoderConfig::load(&path)?.into_encoder()?,
        None => match EncoderConfig::from_env()? {
            Some(config) => config.into_encoder()?,
            None => PhoneticEncoder::with_presets()?,
        },
    };
    tracing::debug!("Encoder ready with {} script(s)", encoder.configs().len());

    let mut failures = 0;
    for name in &args.names {
        match encoder.encode(name) {
            Ok(code) => println!("{}\t{}", name, code),
            Err(e) => {
                eprintln!("{}", e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} name(s) could not be encoded", failures, args.names.len());
    }

    Ok(())
}
