use ci_demo::config::OutputFormat;
use ci_demo::utils::{logger, validation::Validate};
use ci_demo::{render_json, render_text, CliConfig, DemoConfig, DemoError, DemoRunner};
use clap::Parser;

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.format {
        OutputFormat::Text => logger::init_cli_logger(cli.verbose),
        OutputFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting ci-demo");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        tracing::error!("❌ Demo failed: {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &CliConfig) -> Result<(), DemoError> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            DemoConfig::from_file(path)?
        }
        None => DemoConfig::default(),
    };

    config.validate()?;

    let report = DemoRunner::new(config).run()?;

    let output = match cli.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report)?,
    };
    println!("{}", output.trim_end());

    Ok(())
}
