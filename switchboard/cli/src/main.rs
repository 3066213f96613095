//! Switchboard CLI - query Graph communications and OCI Resource Manager

use clap::{Parser, Subcommand};
use serde::Serialize;
use switchboard::{ApiError, ConfigError, RequestConfiguration};
use switchboard_graph::{CollectionQueryParameters, GraphConfig, GraphServiceClient};
use switchboard_oci::{
    ClientConfiguration, GetJobLogsRequest, ListJobsRequest, ListStacksRequest, OciError,
    RequestOptions, ResourceManagerClient,
};
use thiserror::Error;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "switchboard")]
#[command(about = "Query Microsoft Graph communications and OCI Resource Manager", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Microsoft Graph `/communications` (needs GRAPH_ACCESS_TOKEN)
    Graph {
        #[command(subcommand)]
        command: GraphCommands,
    },

    /// OCI Resource Manager (needs OCI_REGION or OCI_ENDPOINT)
    Oci {
        #[command(subcommand)]
        command: OciCommands,
    },
}

#[derive(Subcommand)]
enum GraphCommands {
    /// Show one call
    Call {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// List calls
    Calls {
        /// Page size
        #[arg(long)]
        top: Option<i32>,

        /// OData filter expression
        #[arg(long)]
        filter: Option<String>,
    },

    /// Show a call record with its sessions
    CallRecord {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Show a user's presence
    Presence {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Subcommand)]
enum OciCommands {
    /// List every stack in a compartment
    Stacks {
        #[arg(long, value_name = "OCID")]
        compartment: String,
    },

    /// Show one stack
    Stack {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// List jobs, optionally for one stack
    Jobs {
        #[arg(long, value_name = "OCID")]
        stack: Option<String>,

        #[arg(long, value_name = "OCID")]
        compartment: Option<String>,
    },

    /// Show a job's Terraform log entries
    JobLogs {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Graph(#[from] ApiError),

    #[error(transparent)]
    Oci(#[from] OciError),

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("{0} not found")]
    NotFound(String),
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,switchboard=info,switchboard_graph=info,switchboard_oci=info".to_string(),
            2 => "info,switchboard=debug,switchboard_graph=debug,switchboard_oci=debug".to_string(),
            _ => "debug,switchboard=trace,switchboard_graph=trace,switchboard_oci=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn found<T>(value: Option<T>, what: &str) -> Result<T, CliError> {
    value.ok_or_else(|| CliError::NotFound(what.to_string()))
}

async fn run_graph(command: GraphCommands) -> Result<(), CliError> {
    let client = GraphServiceClient::from_config(&GraphConfig::from_env()?)?;
    let communications = client.communications();

    match command {
        GraphCommands::Call { id } => {
            let call = communications.calls().by_call_id(&id).get(None).await?;
            print_json(&found(call, &format!("call {id}"))?)
        }
        GraphCommands::Calls { top, filter } => {
            let config = RequestConfiguration::new().with_query(CollectionQueryParameters {
                top,
                filter,
                ..Default::default()
            });
            let page = communications.calls().get(Some(&config)).await?;
            print_json(&found(page, "calls")?.value)
        }
        GraphCommands::CallRecord { id } => {
            let record = communications.call_records().by_call_record_id(&id);
            let body = found(record.get(None).await?, &format!("call record {id}"))?;
            let sessions = record.sessions().get(None).await?.map(|page| page.value).unwrap_or_default();
            tracing::debug!(sessions = sessions.len(), "loaded call record sessions");
            print_json(&serde_json::json!({ "callRecord": body, "sessions": sessions }))
        }
        GraphCommands::Presence { id } => {
            let presence = communications.presences().by_presence_id(&id).get(None).await?;
            print_json(&found(presence, &format!("presence {id}"))?)
        }
    }
}

async fn run_oci(command: OciCommands) -> Result<(), CliError> {
    let client = ResourceManagerClient::new(ClientConfiguration::from_env()?)?;
    let options = RequestOptions::default();

    match command {
        OciCommands::Stacks { compartment } => {
            let stacks = client
                .list_all_stacks(&ListStacksRequest::in_compartment(compartment), &options)
                .await?;
            print_json(&stacks)
        }
        OciCommands::Stack { id } => {
            let stack = client.get_stack(&id, &options).await?;
            print_json(&stack.body)
        }
        OciCommands::Jobs { stack, compartment } => {
            let request = ListJobsRequest {
                stack_id: stack,
                compartment_id: compartment,
                ..ListJobsRequest::default()
            };
            print_json(&client.list_all_jobs(&request, &options).await?)
        }
        OciCommands::JobLogs { id } => {
            let logs = client.get_job_logs(&GetJobLogsRequest::new(id), &options).await?;
            print_json(&logs.body)
        }
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json);

    let result = match cli.command {
        Commands::Graph { command } => run_graph(command).await,
        Commands::Oci { command } => run_oci(command).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_nested_subcommands() {
        let cli = Cli::try_parse_from(["switchboard", "-vv", "graph", "calls", "--top", "5"]).unwrap();
        assert_eq!(cli.log_verbosity, 2);
        assert!(matches!(
            cli.command,
            Commands::Graph { command: GraphCommands::Calls { top: Some(5), filter: None } }
        ));

        let cli = Cli::try_parse_from(["switchboard", "oci", "jobs", "--stack", "s1", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Commands::Oci { command: OciCommands::Jobs { stack: Some(_), compartment: None } }
        ));
    }

    #[test]
    fn test_missing_compartment_is_rejected() {
        assert!(Cli::try_parse_from(["switchboard", "oci", "stacks"]).is_err());
    }
}
