use clap::Parser;
use tracing_subscriber::EnvFilter;

use skill_match::cli;
use skill_match::web;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("skill_match=debug,tower_http=debug,info")
    } else {
        EnvFilter::new("skill_match=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Recommend(args) => {
            cli::recommend::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(&args)?;
        }
    }

    Ok(())
}
