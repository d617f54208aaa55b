//! Lineage command
//!
//! Usage:
//!   bimdiff lineage group <SNAPSHOTS>
//!   bimdiff lineage pair <SNAPSHOTS> --ids <A>,<B>
//!   bimdiff lineage sequence <SNAPSHOTS> --ids <ID>,...

use bimdiff_core::errors::ExError;
use bimdiff_core::lineage::{chain_pairs, group_lineages, resolve_pair, resolve_sequence};
use bimdiff_core::model::VersionSnapshot;
use clap::{Args, Subcommand};
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LineageArgs {
    #[command(subcommand)]
    pub command: LineageCommand,
}

#[derive(Debug, Subcommand)]
pub enum LineageCommand {
    /// Group snapshots into lineages, oldest version first
    Group(GroupArgs),
    /// Order two selected snapshots as (old, new)
    Pair(SelectArgs),
    /// Order 2 to 5 selected snapshots chronologically
    Sequence(SelectArgs),
}

#[derive(Debug, Args)]
pub struct GroupArgs {
    /// Snapshot metadata (JSON array)
    pub snapshots: PathBuf,
}

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Snapshot metadata (JSON array)
    pub snapshots: PathBuf,

    /// Selected snapshot ids
    #[arg(long, required = true, value_delimiter = ',', num_args = 1..)]
    pub ids: Vec<i64>,
}

/// Execute lineage command
pub fn execute(args: LineageArgs) -> Result<(), ExError> {
    let output = match args.command {
        LineageCommand::Group(group_args) => {
            let snapshots: Vec<VersionSnapshot> = super::read_json(&group_args.snapshots)?;
            super::to_json(&group_lineages(&snapshots))?
        }
        LineageCommand::Pair(select_args) => {
            let snapshots: Vec<VersionSnapshot> = super::read_json(&select_args.snapshots)?;
            let (old, new) = resolve_pair(&group_lineages(&snapshots), &select_args.ids)?;
            super::to_json(&json!({ "old": old, "new": new }))?
        }
        LineageCommand::Sequence(select_args) => {
            let snapshots: Vec<VersionSnapshot> = super::read_json(&select_args.snapshots)?;
            let sequence = resolve_sequence(&group_lineages(&snapshots), &select_args.ids)?;
            let pairs = chain_pairs(&sequence);
            super::to_json(&json!({ "sequence": sequence, "pairs": pairs }))?
        }
    };

    super::emit(&output, None)
}
