//! Activity commands

use super::{hydrate, print_json, CmdResult};
use camp_core::serialize::activity_view;
use camp_store::SqliteRepo;
use clap::{Args, Subcommand};
use rusqlite::Connection;

#[derive(Debug, Args)]
pub struct ActivityArgs {
    #[command(subcommand)]
    pub command: ActivityCommand,
}

#[derive(Debug, Subcommand)]
pub enum ActivityCommand {
    /// Create an activity
    Add {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        difficulty: Option<i64>,
    },
    /// List all activities
    List,
    /// Print an activity and its signups as JSON
    Show { id: i64 },
    /// Change the supplied fields of an activity
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        difficulty: Option<i64>,
    },
    /// Delete an activity and all of its signups
    Delete { id: i64 },
}

pub fn execute(args: ActivityArgs, conn: &mut Connection) -> CmdResult {
    match args.command {
        ActivityCommand::Add { name, difficulty } => {
            let activity = SqliteRepo::create_activity(conn, name.as_deref(), difficulty)?;
            println!("Created {}", activity);
        }
        ActivityCommand::List => {
            for activity in SqliteRepo::list_activities(conn)? {
                println!("{}", activity);
            }
        }
        ActivityCommand::Show { id } => {
            let store = hydrate(conn)?;
            print_json(&activity_view(&store, id)?)?;
        }
        ActivityCommand::Update {
            id,
            name,
            difficulty,
        } => {
            let activity = SqliteRepo::update_activity(conn, id, name.as_deref(), difficulty)?;
            println!("Updated {}", activity);
        }
        ActivityCommand::Delete { id } => {
            let cascaded = SqliteRepo::delete_activity(conn, id)?;
            println!("Deleted activity {} ({} signups removed)", id, cascaded);
        }
    }
    Ok(())
}
