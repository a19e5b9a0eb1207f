use cake_shop::config::cli::run_cli;
use cake_shop::utils::logger;
use cake_shop::{CakeError, CliConfig, ConsoleSink};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting cake-shop CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run_cli(&config, ConsoleSink::stdout()) {
        Ok(run) => {
            tracing::info!("Printed {} cakes", run.report.cakes.len());
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &CakeError) -> ! {
    tracing::error!(
        "{} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
