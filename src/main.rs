use clap::Parser;

use quicklink::cli::Cli;
use quicklink::config::init_config;
use quicklink::runtime::lifetime::prepare_startup;
use quicklink::runtime::modes::{self, Mode};
use quicklink::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = init_config(cli.config.as_deref());

    match modes::detect_mode(cli.command.as_ref()) {
        #[cfg(feature = "server")]
        Mode::Server => {
            let _guard = init_logging(&config.logging).map_err(|e| {
                eprintln!("{}", e.format_colored());
                anyhow::anyhow!(e.format_simple())
            })?;
            let context = prepare_startup(&config).map_err(|e| {
                tracing::error!("Server startup failed: {}", e);
                anyhow::anyhow!(e.format_simple())
            })?;
            modes::run_server(&config, context).await
        }
        #[cfg(feature = "cli")]
        Mode::Cli => {
            // CLI 模式下仅输出警告以上的日志
            let mut logging = config.logging.clone();
            logging.level = "warn".to_string();
            let _guard = init_logging(&logging).ok();

            let Some(command) = cli.command else {
                anyhow::bail!("CLI mode requires a command");
            };
            if let Err(e) = modes::run_cli(command, &config).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
        Mode::Unknown => {
            anyhow::bail!("No execution mode enabled; build with the `server` or `cli` feature")
        }
    }
}
