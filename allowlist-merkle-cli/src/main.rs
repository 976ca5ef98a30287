use allowlist_merkle_cli::{Cli, handler};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init_logging();
    }

    let stdout = std::io::stdout();
    if let Err(e) = handler::run(&cli, &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Initialize logging with tracing
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "allowlist_merkle_tree=debug,allowlist_merkle_cli=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
