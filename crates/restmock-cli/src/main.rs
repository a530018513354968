//! `restmock` command line front end.

mod args;

use anyhow::{Context, Result};
use args::{Cli, Command, LabelKind};
use clap::Parser;
use restmock_core::api::HttpMethodApi;
use restmock_core::config::ClientConfig;
use restmock_core::form::MethodFormController;
use restmock_core::format;
use restmock_core::view::render;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn client_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = ClientConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(public_url) = &cli.public_url {
        config.public_url = public_url.clone();
    }
    Ok(config)
}

fn label(kind: LabelKind, code: &str) -> String {
    match kind {
        LabelKind::Status => format::method_status_label(code).to_string(),
        LabelKind::Strategy => format::response_strategy_label(code).to_string(),
        LabelKind::Strategies => {
            let codes: Vec<&str> = code.split(',').filter(|c| !c.is_empty()).collect();
            format::multiple_response_strategy_label(&codes)
        }
        LabelKind::DefinitionType => format::definition_type_label(code).to_string(),
        LabelKind::MockResponseStatus => format::mock_response_status_label(code).to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match &cli.command {
        Command::Show { key } => {
            let api = HttpMethodApi::new(&client_config(&cli)?)?;
            let mut controller = MethodFormController::new(key.to_key(), api);
            controller.load().await?;
            print!("{}", render(controller.state()));
        }
        Command::Update { key, edits } => {
            let api = HttpMethodApi::new(&client_config(&cli)?)?;
            let saved = Arc::new(AtomicBool::new(false));
            let flag = saved.clone();
            let mut controller = MethodFormController::new(key.to_key(), api).on_saved(move || {
                flag.store(true, Ordering::SeqCst);
            });

            controller.load().await?;
            for edit in edits.to_edits() {
                controller.edit(edit);
            }
            controller.save().await?;

            if saved.load(Ordering::SeqCst) {
                info!(method = %controller.key(), "method updated");
                controller.load().await?;
            }
            print!("{}", render(controller.state()));
        }
        Command::Label { kind, codes } => {
            for code in codes {
                println!("{}", label(*kind, code));
            }
        }
    }

    Ok(())
}
