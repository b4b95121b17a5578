//! lrp - Lifting requisition portal CLI
//!
//! # Examples
//!
//! ```bash
//! # Assign a requisition
//! lrp submit --req-id REQ-1 --action ADMIN_ASSIGN --by admin@site.com \
//!     --assignee-email crane.op@site.com
//!
//! # Latest requisitions
//! lrp list --pretty
//! ```

use lrp_cli::{Cli, Client, Commands, SubmitAction};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = Client::new(&cli.server);

    let result = match cli.command {
        Commands::Submit {
            req_id,
            action,
            by,
            reason,
            assignee_email,
            lifting_plan_file_id,
        } => {
            let body = SubmitAction {
                req_id,
                pending_action: action,
                action_by: by,
                action_reason: reason,
                assignee_email,
                lifting_plan_drive_file_id: lifting_plan_file_id,
            };
            client.submit_action(&body).await
        }
        Commands::List => client.list_requisitions().await,
        Commands::Health => client.health().await,
    };

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
