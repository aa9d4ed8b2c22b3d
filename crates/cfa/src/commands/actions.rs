//! `cfa actions` command implementation.

use cfa_confluence::Action;
use clap::Args;
use serde_json::{Value, json};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the actions command.
#[derive(Args)]
pub(crate) struct ActionsArgs {
    /// Print the action table as JSON on stdout.
    #[arg(long)]
    json: bool,
}

impl ActionsArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if self.json {
            output.json(&action_table())?;
        } else {
            for action in Action::ALL {
                output.action_row(action.name(), action.description());
            }
        }

        Ok(())
    }
}

/// Machine-readable list of actions.
fn action_table() -> Value {
    Action::ALL
        .into_iter()
        .map(|action| {
            json!({
                "name": action.name(),
                "description": action.description(),
                "takes_payload": action.takes_payload(),
            })
        })
        .collect()
}
