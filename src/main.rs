use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use tfstats::cli::{Cli, Command, EphemeralArgs, GroupArgs, TypeStatsArgs};
use tfstats::config::ReportConfig;
use tfstats::{StateAnalysis, StateDocument, inspect, load_state, output};

const NO_MANAGED_RESOURCES: &str = "No managed resources found in the Terraform state file.";

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = ReportConfig::try_from(&cli).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let document = load_state(&config.state_file)?;

    match cli.command.unwrap_or_default() {
        Command::List => {
            let analysis = analyze(document, &config);
            if analysis.rows().is_empty() {
                println!("{}", NO_MANAGED_RESOURCES);
            } else {
                println!("{}", output::render_rows(analysis.rows()));
            }
            export_listing(&analysis, &config)?;
        }
        Command::Aggregate => {
            let analysis = analyze(document, &config);
            println!("{}", output::render_summary(&analysis.summary(), config.scope));
            export_listing(&analysis, &config)?;
        }
        Command::Count => {
            let analysis = analyze(document, &config);
            println!("{}", output::render_count(analysis.total_instances()));
            export_listing(&analysis, &config)?;
        }
        Command::Group(args) => {
            let analysis = analyze(document, &config);
            group(&analysis, &args, &config)?;
        }
        Command::TypeStats(args) => {
            warn_ignored_flags(&config);
            type_stats(&document, &args);
        }
        Command::Ephemeral(args) => {
            warn_ignored_flags(&config);
            ephemeral(&document, &args);
        }
    }

    Ok(())
}

fn analyze(document: StateDocument, config: &ReportConfig) -> StateAnalysis {
    let analysis = StateAnalysis::new(document, config.scope);
    tracing::info!(count = analysis.total_instances(), "state flattened");

    if config.debug {
        let check = analysis.count_check();
        if !check.is_consistent() {
            tracing::warn!(
                flattened = check.flattened,
                reference = check.reference,
                "instance count differs from the reference count"
            );
        }
        println!("{}", output::render_count_check(&check, config.scope));
    }

    analysis
}

fn export_listing(analysis: &StateAnalysis, config: &ReportConfig) -> Result<()> {
    if let Some(path) = &config.export {
        let written = output::export_rows(path, analysis.rows())?;
        println!("Results saved to {}", written.display());
    }
    Ok(())
}

fn group(analysis: &StateAnalysis, args: &GroupArgs, config: &ReportConfig) -> Result<()> {
    let groups = analysis.groups();

    if groups.is_empty() {
        println!("{}", NO_MANAGED_RESOURCES);
    } else if args.tree {
        let root = config.state_file.display().to_string();
        print!("{}", output::render_group_tree(&root, &groups));
    } else {
        println!("{}", output::render_groups(&groups));
    }

    if let Some(path) = &config.export {
        let written = output::export_groups(path, &groups)?;
        println!("Results saved to {}", written.display());
    }
    Ok(())
}

fn warn_ignored_flags(config: &ReportConfig) {
    let ignored = config.inspection_ignored_flags();
    if !ignored.is_empty() {
        tracing::warn!(flags = %ignored.join(", "), "flags have no effect on this subcommand");
    }
}

fn type_stats(document: &StateDocument, args: &TypeStatsArgs) {
    let result = inspect::type_instances(document, &args.resource_type);
    tracing::info!(
        resource_type = %args.resource_type,
        count = result.instances.len(),
        unique = result.unique.len(),
        "type extraction complete"
    );
    println!("{}", output::render_type_instances(&result, args.detailed));
}

fn ephemeral(document: &StateDocument, args: &EphemeralArgs) {
    let scan = inspect::scan_ephemeral(document, &args.keywords);
    println!("{}", output::render_ephemeral(&scan, args.attributes));
}
