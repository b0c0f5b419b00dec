use clap::Parser;
use tracing_subscriber::EnvFilter;

use inkcheck::cli::{self, Cli, Commands};
use inkcheck::config;
use inkcheck::errors::InkcheckError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Keep stdout clean for piping; logs go to stderr. The server logs at info by default.
    let verbosity = cli.verbose.saturating_add(u8::from(matches!(cli.command, Commands::Serve(_))));
    let log_level = match (cli.quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(!cli.no_color)
            .with_writer(std::io::stderr)
            .init();
    }

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let result = match cli.command {
        Commands::Score(args) => cli::score::handle_score(args, cli.quiet).await,
        Commands::Process(args) => cli::process::handle_process(args, cli.quiet).await,
        Commands::Serve(args) => cli::serve::handle_serve(args).await,
        Commands::Validate(args) => handle_validate(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), InkcheckError> {
    let path = std::path::PathBuf::from(&args.config);
    let parsed = config::parse_config(&path).await?;
    println!("Configuration is valid: {}", args.config);
    println!(
        "  provider: {}  model: {}  output: {}",
        parsed.provider(),
        parsed.model(),
        parsed.output_dir()
    );
    Ok(())
}
