//! Camp CLI
//!
//! Command-line front end for the camp signup records

use camp_core::logging_facility::{self, Profile};
use camp_core::{CampError, ExError};
use camp_core_types::RequestId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "camp")]
#[command(about = "Camp signups - activities, campers and their signups", long_about = None)]
struct Cli {
    /// SQLite database file (created and migrated on first use)
    #[arg(long, global = true, default_value = "camp.db")]
    db: PathBuf,

    /// Logging profile: dev or prod (logs go to stderr)
    #[arg(long, global = true)]
    log: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Activity operations
    Activity(commands::activity::ActivityArgs),
    /// Camper operations
    Camper(commands::camper::CamperArgs),
    /// Signup operations
    Signup(commands::signup::SignupArgs),
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = camp_store::db::open(&cli.db)?;
    camp_store::migrations::apply_migrations(&mut conn)?;

    match cli.command {
        Commands::Activity(args) => commands::activity::execute(args, &mut conn),
        Commands::Camper(args) => commands::camper::execute(args, &mut conn),
        Commands::Signup(args) => commands::signup::execute(args, &mut conn),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log {
        logging_facility::init(profile);
    }

    let request_id = RequestId::new();
    let span = tracing::info_span!("camp", request_id = %request_id);
    let _guard = span.enter();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", with_request_id(e, request_id));
        std::process::exit(1);
    }
}

/// Tag camp errors with the invocation's request ID; other errors pass through
fn with_request_id(
    err: Box<dyn std::error::Error>,
    request_id: RequestId,
) -> Box<dyn std::error::Error> {
    let err = match err.downcast::<ExError>() {
        Ok(ex) => return Box::new((*ex).with_request_id(request_id)),
        Err(err) => err,
    };
    match err.downcast::<CampError>() {
        Ok(camp) => Box::new(ExError::from(*camp).with_request_id(request_id)),
        Err(err) => err,
    }
}
