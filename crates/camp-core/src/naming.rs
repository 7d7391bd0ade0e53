//! Constraint naming convention
//!
//! Every constraint in the relational schema gets a name derived from its
//! table and columns, so regenerating the schema always yields the same
//! identifiers:
//!
//! | kind        | template                                  |
//! |-------------|-------------------------------------------|
//! | index       | `ix_<table>_<column>`                     |
//! | unique      | `uq_<table>_<column>`                     |
//! | check       | `ck_<table>_<constraint_name>`            |
//! | foreign key | `fk_<table>_<column>_<referred_table>`    |
//! | primary key | `pk_<table>`                              |

use std::fmt;

pub const ACTIVITIES_TABLE: &str = "activities";
pub const CAMPERS_TABLE: &str = "campers";
pub const SIGNUPS_TABLE: &str = "signups";

/// A constraint described by the parts its name is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint<'a> {
    Index {
        table: &'a str,
        column: &'a str,
    },
    Unique {
        table: &'a str,
        column: &'a str,
    },
    Check {
        table: &'a str,
        name: &'a str,
    },
    ForeignKey {
        table: &'a str,
        column: &'a str,
        referred_table: &'a str,
    },
    PrimaryKey {
        table: &'a str,
    },
}

impl Constraint<'_> {
    /// The deterministic constraint name
    pub fn name(&self) -> String {
        self.to_string()
    }

    pub fn table(&self) -> &str {
        match self {
            Constraint::Index { table, .. }
            | Constraint::Unique { table, .. }
            | Constraint::Check { table, .. }
            | Constraint::ForeignKey { table, .. }
            | Constraint::PrimaryKey { table } => table,
        }
    }
}

impl fmt::Display for Constraint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Index { table, column } => write!(f, "ix_{}_{}", table, column),
            Constraint::Unique { table, column } => write!(f, "uq_{}_{}", table, column),
            Constraint::Check { table, name } => write!(f, "ck_{}_{}", table, name),
            Constraint::ForeignKey {
                table,
                column,
                referred_table,
            } => write!(f, "fk_{}_{}_{}", table, column, referred_table),
            Constraint::PrimaryKey { table } => write!(f, "pk_{}", table),
        }
    }
}

/// Every named constraint the camp schema declares, in declaration order
pub fn schema_constraints() -> Vec<Constraint<'static>> {
    vec![
        Constraint::PrimaryKey {
            table: ACTIVITIES_TABLE,
        },
        Constraint::PrimaryKey {
            table: CAMPERS_TABLE,
        },
        Constraint::Check {
            table: CAMPERS_TABLE,
            name: "name_not_empty",
        },
        Constraint::Check {
            table: CAMPERS_TABLE,
            name: "age_range",
        },
        Constraint::PrimaryKey {
            table: SIGNUPS_TABLE,
        },
        Constraint::Check {
            table: SIGNUPS_TABLE,
            name: "time_range",
        },
        Constraint::ForeignKey {
            table: SIGNUPS_TABLE,
            column: "camper_id",
            referred_table: CAMPERS_TABLE,
        },
        Constraint::ForeignKey {
            table: SIGNUPS_TABLE,
            column: "activity_id",
            referred_table: ACTIVITIES_TABLE,
        },
        Constraint::Index {
            table: SIGNUPS_TABLE,
            column: "camper_id",
        },
        Constraint::Index {
            table: SIGNUPS_TABLE,
            column: "activity_id",
        },
    ]
}
