mod args;

pub use args::{Cli, Command, EphemeralArgs, GroupArgs, TypeStatsArgs};
