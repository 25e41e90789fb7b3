use std::path::PathBuf;

use crate::cli::Cli;
use crate::scope::ResourceScope;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportConfig {
    pub state_file: PathBuf,
    pub scope: ResourceScope,
    pub debug: bool,
    pub export: Option<PathBuf>,
}

impl ReportConfig {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug { "tfstats=debug" } else { "warn" }
    }

    /// Report flags that are set but have no effect on `type-stats` and `ephemeral`.
    pub fn inspection_ignored_flags(&self) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        if self.export.is_some() {
            ignored.push("--output");
        }
        match self.scope {
            ResourceScope::All => {}
            ResourceScope::ExcludeHashicorp => ignored.push("--hide-hashicorp"),
            ResourceScope::OnlyHashicorp => ignored.push("--only-hashicorp"),
        }
        if self.debug {
            ignored.push("--debug");
        }
        ignored
    }
}

impl TryFrom<&Cli> for ReportConfig {
    type Error = clap::Error;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        Ok(Self {
            state_file: cli.state_file()?.to_path_buf(),
            scope: cli.scope(),
            debug: cli.debug,
            export: cli.output.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::parse_from(["tfstats", "-f", "prod.tfstate", "-d", "--only-hashicorp", "-o", "out"]);

        let config = ReportConfig::try_from(&cli).unwrap();

        assert_eq!(config.state_file, PathBuf::from("prod.tfstate"));
        assert_eq!(config.scope, ResourceScope::OnlyHashicorp);
        assert!(config.debug);
        assert_eq!(config.export, Some(PathBuf::from("out")));
        assert_eq!(config.default_log_filter(), "tfstats=debug");
    }

    #[test]
    fn test_config_requires_state_file() {
        let cli = Cli {
            file: None,
            output: None,
            hide_hashicorp: false,
            only_hashicorp: false,
            debug: false,
            command: None,
        };

        assert!(ReportConfig::try_from(&cli).is_err());
    }

    #[test]
    fn test_default_log_filter_quiet() {
        assert_eq!(ReportConfig::default().default_log_filter(), "warn");
    }

    #[test]
    fn test_inspection_ignored_flags() {
        let cli = Cli::parse_from(["tfstats", "ephemeral", "-f", "s.json", "-H", "-d", "-o", "out"]);

        let config = ReportConfig::try_from(&cli).unwrap();

        assert_eq!(
            config.inspection_ignored_flags(),
            vec!["--output", "--hide-hashicorp", "--debug"]
        );
        assert!(ReportConfig::default().inspection_ignored_flags().is_empty());
    }
}
