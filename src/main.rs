use clap::Parser;
use eyre::Result;
use renumber::cli::{Args, Commands};
use renumber::fs;
use renumber::types::PrefixRule;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let verbose = match &args.command {
        Commands::Lessons(a) | Commands::Scripts(a) => a.verbose,
    };

    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let (dir, rule) = match args.command {
        Commands::Lessons(a) => (fs::resolve_target_dir(a.dir, None)?, PrefixRule::FourDigit),
        Commands::Scripts(a) => (
            fs::resolve_target_dir(a.dir, Some("src/javascript"))?,
            PrefixRule::ZeroLed,
        ),
    };

    let renamed = fs::renumber(&dir, rule)?;
    tracing::info!("renumbered {renamed} files in {}", dir.display());

    Ok(())
}
