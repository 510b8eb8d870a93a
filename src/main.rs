use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use ormgen::cli::Args;
use ormgen::config::ResolverConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ResolverConfig::load(args.config.as_deref())?.with_overrides(args.engine, args.enums, args.quiet);
    let output = args.command.run(&config, args.format)?;
    println!("{}", output);
    Ok(())
}
