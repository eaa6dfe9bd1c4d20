use clap::Parser;
use small_calc::utils::logger;
use small_calc::{Calculator, CliConfig, Demo};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-calc CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut demo = Demo::new(Calculator::new());

    match demo.run() {
        Ok(report) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for computation in &report {
                    println!("{}", computation);
                }
            }
            tracing::info!("✅ Demo sequence completed");
        }
        Err(e) => {
            tracing::error!("❌ Demo sequence failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
