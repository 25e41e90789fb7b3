//! tfstats - Terraform state resource statistics
//!
//! A library for flattening the managed resources of a Terraform state file into
//! per-instance rows and summarizing, grouping and cross-checking them.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod group;
pub mod inspect;
pub mod output;
pub mod reference;
pub mod resource;
pub mod scope;
pub mod stats;
pub mod terraform;

mod error;

pub use analysis::StateAnalysis;
pub use error::{Result, TfStatsError};
pub use group::GroupEntry;
pub use reference::CountCheck;
pub use resource::InstanceRow;
pub use scope::ResourceScope;
pub use stats::{FrequencyEntry, Summary};
pub use terraform::{ResourceRecord, StateDocument, load_state};
