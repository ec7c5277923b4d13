use clap::Parser;
use tracing_subscriber::EnvFilter;
use esgrisk::cli;
use esgrisk::config;
use esgrisk::errors::EsgriskError;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        cli::Commands::Assess(args) => cli::assess::handle_assess(args).await,
        cli::Commands::Discover(args) => cli::discover::handle_discover(args).await,
        cli::Commands::Keywords(args) => cli::keywords::handle_keywords(args).await,
        cli::Commands::Validate(args) => handle_validate(args).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                EsgriskError::Config(_) => 2,
                EsgriskError::Authentication(_) => 4,
                EsgriskError::InvalidInput(_) => 5,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), EsgriskError> {
    let path = std::path::PathBuf::from(&args.config);
    let _config = config::parse_config(&path).await?;
    println!("Configuration is valid: {}", args.config);
    Ok(())
}
