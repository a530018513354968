//! Command line arguments.

use clap::{Args, Parser, Subcommand, ValueEnum};
use restmock_core::form::{Edit, FieldEdit};
use restmock_core::types::codes::{HttpMethod, MethodStatus, StrategyCode};
use restmock_core::types::key::MethodKey;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "restmock", version, about = "Administer mocked REST methods")]
pub struct Cli {
    /// Client config file (YAML, JSON or JSONC)
    #[arg(long, global = true, env = "RESTMOCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Mock server base URL, overrides config and environment
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path prefix the server is deployed under
    #[arg(long, global = true)]
    pub public_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a method and print its form
    Show {
        #[command(flatten)]
        key: KeyArgs,
    },
    /// Edit a method and save it
    Update {
        #[command(flatten)]
        key: KeyArgs,
        #[command(flatten)]
        edits: EditArgs,
    },
    /// Print display labels for codes
    Label {
        #[arg(value_enum)]
        kind: LabelKind,
        /// Codes to translate; for `strategies` a comma separated list
        codes: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LabelKind {
    Status,
    Strategy,
    Strategies,
    DefinitionType,
    MockResponseStatus,
}

#[derive(Debug, Args)]
pub struct KeyArgs {
    #[arg(long)]
    pub project: String,
    #[arg(long)]
    pub application: String,
    #[arg(long)]
    pub resource: String,
    #[arg(long)]
    pub method: String,
}

impl KeyArgs {
    pub fn to_key(&self) -> MethodKey {
        MethodKey::new(
            self.project.clone(),
            self.application.clone(),
            self.resource.clone(),
            self.method.clone(),
        )
    }
}

#[derive(Debug, Default, Args)]
pub struct EditArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub http_method: Option<HttpMethod>,
    #[arg(long)]
    pub status: Option<MethodStatus>,
    /// Check a response strategy (repeatable)
    #[arg(long = "select-strategy")]
    pub select_strategies: Vec<StrategyCode>,
    /// Uncheck a response strategy (repeatable)
    #[arg(long = "deselect-strategy")]
    pub deselect_strategies: Vec<StrategyCode>,
    /// Forward target; an empty value clears it
    #[arg(long)]
    pub forwarded_endpoint: Option<String>,
    #[arg(long)]
    pub automatic_forward: Option<bool>,
    #[arg(long)]
    pub simulate_network_delay: Option<bool>,
    #[arg(long)]
    pub network_delay: Option<String>,
    /// Default mock response id; an empty value selects none
    #[arg(long)]
    pub default_response: Option<String>,
}

impl EditArgs {
    /// Edits in the order the form applies them. Automatic forward goes last
    /// so it is checked against the edited endpoint and default response.
    pub fn to_edits(&self) -> Vec<Edit> {
        let mut edits = Vec::new();
        if let Some(name) = &self.name {
            edits.push(FieldEdit::Name(name.clone()).into());
        }
        if let Some(method) = &self.http_method {
            edits.push(FieldEdit::HttpMethod(method.clone()).into());
        }
        if let Some(status) = &self.status {
            edits.push(FieldEdit::Status(status.clone()).into());
        }
        for code in &self.select_strategies {
            edits.push(Edit::ToggleStrategy {
                code: code.clone(),
                selected: true,
            });
        }
        for code in &self.deselect_strategies {
            edits.push(Edit::ToggleStrategy {
                code: code.clone(),
                selected: false,
            });
        }
        if let Some(endpoint) = &self.forwarded_endpoint {
            let endpoint = (!endpoint.is_empty()).then(|| endpoint.clone());
            edits.push(FieldEdit::ForwardedEndpoint(endpoint).into());
        }
        if let Some(enabled) = self.simulate_network_delay {
            edits.push(FieldEdit::SimulateNetworkDelay(enabled).into());
        }
        if let Some(delay) = &self.network_delay {
            edits.push(FieldEdit::NetworkDelay(delay.clone()).into());
        }
        if let Some(id) = &self.default_response {
            let id = (!id.is_empty()).then(|| id.clone());
            edits.push(FieldEdit::DefaultMockResponseId(id).into());
        }
        if let Some(enabled) = self.automatic_forward {
            edits.push(FieldEdit::AutomaticForward(enabled).into());
        }
        edits
    }
}
