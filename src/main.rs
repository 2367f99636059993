use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use assignmentctl::cli::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "assignmentctl=debug"
    } else {
        "assignmentctl=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = run(cli).await {
        eprintln!("{} {err:#}", style("error:").red().bold());
        std::process::exit(1);
    }
}
