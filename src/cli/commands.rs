//! Command dispatch

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::application::services::SurveyService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{Diagnostics, PieLevel, TagStatistics};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Execute the parsed command line.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let command = match &cli.command {
        Some(command) => command,
        None => {
            return Err(CliError::Usage(
                "no command given, see `surveypie --help`".to_string(),
            ))
        }
    };

    // commands that need neither settings nor data
    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    if let Commands::Config { command } = command {
        return config_command(command, &settings);
    }

    let data_file = SurveyService::resolve_data_file(cli.data.as_deref(), &settings)?.to_path_buf();
    let container = ServiceContainer::new(settings);
    let root = container.survey.load(&data_file)?;
    debug!("loaded {} levels from {}", root.iter().count(), data_file.display());

    match command {
        Commands::Tree => {
            output::info(&root.to_tree_string());
            Ok(())
        }
        Commands::Summary { level, group } => {
            let level = SurveyService::select(&root, level.as_deref())?;
            summary(level, group.as_deref());
            Ok(())
        }
        Commands::Sunburst {
            level,
            current,
            depth,
        } => {
            let level = SurveyService::select(&root, level.as_deref())?;
            print_json(&container.charts.sunburst(level, *current, *depth))
        }
        Commands::Details { level } => {
            let level = SurveyService::select(&root, level.as_deref())?;
            let details = container.charts.details(level);
            report(&details.warnings());
            print_json(&details)
        }
        Commands::Ring { level, selected } => {
            let level = SurveyService::select(&root, level.as_deref())?;
            let selected = match selected.as_deref() {
                Some(name) => Some(
                    level
                        .find(&[name])
                        .ok_or_else(|| CliError::InvalidArgs(format!("no child named {name}")))?,
                ),
                None => None,
            };
            print_json(&container.charts.ring_series(level, selected))
        }
        Commands::Gradient {
            level,
            group,
            angle,
        } => {
            let level = SurveyService::select(&root, level.as_deref())?;
            print_json(&container.charts.gradient(level, *angle, group.as_deref()))
        }
        Commands::Config { .. } | Commands::Completion { .. } => Ok(()),
    }
}

fn config_command(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::action("global", "<unavailable>"),
            }
            output::action("local", &local_config_path(std::path::Path::new(".")).display());
        }
    }
    Ok(())
}

#[instrument(level = "debug", skip(level), fields(level = level.name()))]
fn summary(level: &PieLevel, group: Option<&str>) {
    let dataset = level.dataset();
    output::header(&format!(
        "{}: {:.2} over {} answers",
        level.name(),
        level.average(group),
        dataset.answers(None, group).len()
    ));

    for question in dataset.question_summaries() {
        let stats = match group {
            Some(g) => question
                .by_group
                .iter()
                .find(|(name, _)| name == g)
                .map(|(_, stats)| stats.clone())
                .unwrap_or_else(|| TagStatistics::from_answers(&[])),
            None => question.total.clone(),
        };
        print_statistics(&question.question_tag, &stats);
        if group.is_none() {
            for (name, stats) in &question.by_group {
                print_statistics(&format!("  {name}"), stats);
            }
        }
    }
}

fn print_statistics(label: &str, stats: &TagStatistics) {
    match &stats.summary {
        Some(summary) => output::detail(&format!(
            "{label}: n={} mean={:.2} {:?}",
            stats.count,
            stats.mean,
            summary.to_array()
        )),
        None => {
            warn!(label, "no answers");
            output::missing(&format!("{label}: no answers"));
        }
    }
}

fn report(warnings: &Diagnostics) {
    for warning in warnings.warnings() {
        debug!(%warning, "missing data");
        output::warning(warning);
    }
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(InfraError::from)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").map_err(|e| InfraError::io("write chart data to stdout", e))?;
    Ok(())
}
