//! Alarm clock CLI entry point

use std::process::ExitCode;

use clap::Parser;

use alarm_clock::cli::{
    app::{config_store, load_merged_config, resolve_ring_options, ring_cli_config, run_ring},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    schedule_cmd::handle_schedule_command,
    times_cmd::handle_times_command,
    EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR,
};
use alarm_clock::domain::config::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let presenter = Presenter::new();
    let store = config_store(cli.config);

    match cli.command {
        Commands::Config { action } => {
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Commands::Times { period } => {
            handle_times_command(period.map(Into::into), &presenter);
            ExitCode::from(EXIT_SUCCESS)
        }
        Commands::Schedule { pulses, json } => {
            let config = load_merged_config(&store, AppConfig::empty()).await;
            let pulses = usize::from(pulses);
            if let Err(e) = handle_schedule_command(config.ramp_config(), pulses, json, &presenter)
            {
                presenter.error(&e);
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Commands::Ring(args) => {
            let config = load_merged_config(&store, ring_cli_config(&args)).await;

            let options = match resolve_ring_options(&config, args.dismiss_after.as_deref()) {
                Ok(options) => options,
                Err(e) => {
                    presenter.error(&e);
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };

            run_ring(options).await
        }
    }
}
