//! saanvika-authz - role-hierarchy authorization from the command line
//!
//! Answers visibility, creation and action questions for the SAANVIKA
//! employee console and renders annotated directory pages from fixture files.

#![allow(missing_docs)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use saanvika_authz::config::LogFormat;
use saanvika_authz::utils::logging::init_logging;
use saanvika_authz::{
    Config, EmployeeDirectory, InMemoryRecordStore, PageRequest, Role, RoleAuthorizationEngine,
    StoreFixture, Subject, SubjectStatus,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(
    name = "saanvika-authz",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about = "Role-hierarchy authorization for the SAANVIKA employee console"
)]
struct Cli {
    /// YAML configuration file; the environment is used when omitted
    #[arg(long, global = true, env = "SAANVIKA_CONFIG")]
    config: Option<PathBuf>,

    /// Log level; takes precedence over RUST_LOG and the configuration
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Override the configured log format (text or json)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the actions a requester may take on a subject
    Actions {
        #[arg(long, value_parser = parse_role)]
        requester: Role,
        /// Role of the subject
        #[arg(long, value_parser = parse_role)]
        role: Role,
        #[arg(long, value_parser = parse_status)]
        status: SubjectStatus,
    },
    /// Print whether a requester may create a subject with the candidate role
    CanCreate {
        #[arg(long, value_parser = parse_role)]
        requester: Role,
        #[arg(long, value_parser = parse_role)]
        candidate: Role,
    },
    /// Print the annotated directory page a requester would see
    View {
        #[arg(long, value_parser = parse_role)]
        requester: Role,
        /// YAML or JSON fixture with `offices` and `subjects`
        #[arg(long)]
        records: PathBuf,
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Defaults to the configured page size
        #[arg(long)]
        page_size: Option<usize>,
    },
}

/// Unrecognized roles decode to `unknown` and are denied by the engine
fn parse_role(s: &str) -> Result<Role, String> {
    Ok(Role::parse_lenient(s))
}

fn parse_status(s: &str) -> Result<SubjectStatus, String> {
    Ok(SubjectStatus::parse_lenient(s))
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Alternate form prints the whole context chain
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli).await?;
    init_logging(config.logging(), cli.log_level.as_deref())?;
    debug!("Running {:?}", cli.command);

    let engine = RoleAuthorizationEngine::new();

    match cli.command {
        Command::Actions {
            requester,
            role,
            status,
        } => {
            let subject = Subject::new(String::new(), String::new(), role, None).with_status(status);
            let actions = engine.authorized_actions(requester, &subject);
            println!("{}", serde_json::to_string(&actions)?);
        }
        Command::CanCreate {
            requester,
            candidate,
        } => {
            println!("{}", engine.can_create(requester, candidate));
        }
        Command::View {
            requester,
            records,
            page,
            page_size,
        } => {
            let fixture = StoreFixture::from_file(&records)
                .await
                .with_context(|| format!("Failed to load records from {}", records.display()))?;
            let store = Arc::new(InMemoryRecordStore::from_fixture(fixture)?);
            let directory = EmployeeDirectory::new(store, config.directory().clone());

            let request = PageRequest::new(page, page_size.unwrap_or(config.directory().page_size));
            let view = directory.view_page(requester, request).await?;

            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(())
}

async fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };

    if let Some(level) = &cli.log_level {
        config.authz.logging.level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.authz.logging.format = format;
    }

    config.validate()?;
    Ok(config)
}
