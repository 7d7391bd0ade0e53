//! Signup commands

use super::{hydrate, print_json, CmdResult};
use camp_core::serialize::signup_view;
use camp_store::SqliteRepo;
use clap::{Args, Subcommand};
use rusqlite::Connection;

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[command(subcommand)]
    pub command: SignupCommand,
}

#[derive(Debug, Subcommand)]
pub enum SignupCommand {
    /// Sign a camper up for an activity at an hour (1 to 22)
    Add {
        #[arg(long)]
        time: i64,
        #[arg(long)]
        camper: i64,
        #[arg(long)]
        activity: i64,
    },
    /// List all signups
    List,
    /// Print a signup with its camper and activity as JSON
    Show { id: i64 },
    /// Change the supplied fields of a signup
    Update {
        id: i64,
        #[arg(long)]
        time: Option<i64>,
        #[arg(long)]
        camper: Option<i64>,
        #[arg(long)]
        activity: Option<i64>,
    },
    /// Delete a single signup
    Delete { id: i64 },
}

pub fn execute(args: SignupArgs, conn: &mut Connection) -> CmdResult {
    match args.command {
        SignupCommand::Add {
            time,
            camper,
            activity,
        } => {
            let signup = SqliteRepo::create_signup(conn, time, camper, activity)?;
            println!("Created {}", signup);
        }
        SignupCommand::List => {
            for signup in SqliteRepo::list_signups(conn)? {
                println!(
                    "{} time={} camper={} activity={}",
                    signup,
                    signup.time(),
                    signup.camper_id,
                    signup.activity_id
                );
            }
        }
        SignupCommand::Show { id } => {
            let store = hydrate(conn)?;
            print_json(&signup_view(&store, id)?)?;
        }
        SignupCommand::Update {
            id,
            time,
            camper,
            activity,
        } => {
            let signup = SqliteRepo::update_signup(conn, id, time, camper, activity)?;
            println!("Updated {}", signup);
        }
        SignupCommand::Delete { id } => {
            SqliteRepo::delete_signup(conn, id)?;
            println!("Deleted signup {}", id);
        }
    }
    Ok(())
}
