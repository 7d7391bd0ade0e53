//! Camper commands

use super::{hydrate, print_json, CmdResult};
use camp_core::serialize::{camper_summary, camper_view};
use camp_store::SqliteRepo;
use clap::{Args, Subcommand};
use rusqlite::Connection;

#[derive(Debug, Args)]
pub struct CamperArgs {
    #[command(subcommand)]
    pub command: CamperCommand,
}

#[derive(Debug, Subcommand)]
pub enum CamperCommand {
    /// Create a camper (age 8 to 18)
    Add {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: i64,
    },
    /// List all campers
    List,
    /// Print a camper as JSON
    Show {
        id: i64,
        /// Omit the signups collection
        #[arg(long)]
        without_signups: bool,
    },
    /// Change the supplied fields of a camper
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<i64>,
    },
    /// Delete a camper and all of their signups
    Delete { id: i64 },
}

pub fn execute(args: CamperArgs, conn: &mut Connection) -> CmdResult {
    match args.command {
        CamperCommand::Add { name, age } => {
            let camper = SqliteRepo::create_camper(conn, name.as_deref(), age)?;
            println!("Created {}", camper);
        }
        CamperCommand::List => {
            for camper in SqliteRepo::list_campers(conn)? {
                println!("{}", camper);
            }
        }
        CamperCommand::Show {
            id,
            without_signups,
        } => {
            let store = hydrate(conn)?;
            if without_signups {
                print_json(&camper_summary(&store, id)?)?;
            } else {
                print_json(&camper_view(&store, id)?)?;
            }
        }
        CamperCommand::Update { id, name, age } => {
            let camper = SqliteRepo::update_camper(conn, id, name.as_deref(), age)?;
            println!("Updated {}", camper);
        }
        CamperCommand::Delete { id } => {
            let cascaded = SqliteRepo::delete_camper(conn, id)?;
            println!("Deleted camper {} ({} signups removed)", id, cascaded);
        }
    }
    Ok(())
}
