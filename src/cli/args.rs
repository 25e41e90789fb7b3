use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use crate::inspect::DEFAULT_EPHEMERAL_KEYWORDS;
use crate::scope::ResourceScope;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Terraform state file to analyze (required)
    #[arg(short, long, global = true, env = "TFSTATS_STATE_FILE")]
    pub file: Option<PathBuf>,

    /// Write results to a CSV file (".csv" is appended when missing; not used by type-stats or ephemeral)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Exclude 'tfe_' and 'vault_' resources (not used by type-stats or ephemeral)
    #[arg(short = 'H', long, global = true, conflicts_with = "only_hashicorp")]
    pub hide_hashicorp: bool,

    /// Only include 'tfe_' and 'vault_' resources (not used by type-stats or ephemeral)
    #[arg(long, global = true)]
    pub only_hashicorp: bool,

    /// Cross-check the instance count against the jq reference count (not used by type-stats or ephemeral)
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    // NOTE: clap rejects global args marked required, so presence is checked here.
    pub fn state_file(&self) -> Result<&Path, clap::Error> {
        self.file.as_deref().ok_or_else(|| {
            Self::command().error(
                ErrorKind::MissingRequiredArgument,
                "the following required arguments were not provided:\n  --file <FILE>",
            )
        })
    }

    pub fn scope(&self) -> ResourceScope {
        if self.hide_hashicorp {
            ResourceScope::ExcludeHashicorp
        } else if self.only_hashicorp {
            ResourceScope::OnlyHashicorp
        } else {
            ResourceScope::All
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Default)]
pub enum Command {
    /// List every managed resource instance
    #[default]
    List,
    /// Print aggregate statistics
    Aggregate,
    /// Print only the number of resource instances
    Count,
    /// Group instances by module, type, name and provider
    Group(GroupArgs),
    /// Extract the unique instances of one resource type
    TypeStats(TypeStatsArgs),
    /// Find instances named like demo/test/temporary resources
    Ephemeral(EphemeralArgs),
}

#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct GroupArgs {
    /// Render the groups as a module tree
    #[arg(long)]
    pub tree: bool,
}

#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct TypeStatsArgs {
    /// Resource type to extract (e.g. azuread_group_member)
    #[arg(short = 't', long = "type")]
    pub resource_type: String,

    /// Print the attributes of every unique instance
    #[arg(short = 'D', long)]
    pub detailed: bool,
}

#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct EphemeralArgs {
    /// Name keyword to look for (repeatable)
    #[arg(short, long = "keyword", default_values_t = default_keywords())]
    pub keywords: Vec<String>,

    /// Include instance attributes in the output
    #[arg(short, long)]
    pub attributes: bool,
}

fn default_keywords() -> Vec<String> {
    DEFAULT_EPHEMERAL_KEYWORDS
        .iter()
        .map(|k| k.to_string())
        .collect()
}
