//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands, FoldOp};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, OutputFormat, Settings};
use crate::domain::{curry, Application, Nary, TreeNodeConvert};
use crate::infrastructure::ServiceContainer;

/// Label of the synthetic node above the top level of a printed tree.
const NULL_ROOT_LABEL: &str = "·";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Ok(());
    };

    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()
            .map_err(|e| crate::infrastructure::InfraError::io("current directory", e))?,
    };

    match command {
        Commands::Tree { file, root, format } => {
            _tree(&container(&config_dir)?, file, root.as_deref(), *format)
        }
        Commands::Leaves { file, root } => {
            _leaves(&container(&config_dir)?, file, root.as_deref())
        }
        Commands::Branches { file, root } => {
            _branches(&container(&config_dir)?, file, root.as_deref())
        }
        Commands::Check { file } => _check(&container(&config_dir)?, file),
        Commands::Curry { op, arity, args } => _curry(*op, *arity, args),
        Commands::Config { command } => _config(command, &config_dir),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

fn container(config_dir: &Path) -> CliResult<ServiceContainer> {
    let settings = Settings::load(Some(config_dir))?;
    debug!("settings: {:?}", settings);
    Ok(ServiceContainer::new(settings))
}

#[instrument(skip(container))]
fn _tree(
    container: &ServiceContainer,
    file: &Path,
    root: Option<&str>,
    format: Option<OutputFormat>,
) -> CliResult<()> {
    let built = container.hierarchy.build(file, root)?;
    let format = format.unwrap_or(container.settings.format);
    debug!("format: {}", format);

    match format {
        OutputFormat::Tree => {
            let label = built.root.as_deref().unwrap_or(NULL_ROOT_LABEL);
            output::info(&built.tree.to_tree_string(label));
        }
        OutputFormat::Toml => {
            let rendered =
                toml::to_string_pretty(&built.tree).map_err(|e| ApplicationError::Config {
                    message: format!("serialize tree: {e}"),
                })?;
            output::info(&rendered);
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn _leaves(container: &ServiceContainer, file: &Path, root: Option<&str>) -> CliResult<()> {
    let built = container.hierarchy.build(file, root)?;
    for leaf in built.tree.leaf_ids() {
        output::info(&leaf);
    }
    Ok(())
}

#[instrument(skip(container))]
fn _branches(container: &ServiceContainer, file: &Path, root: Option<&str>) -> CliResult<()> {
    let built = container.hierarchy.build(file, root)?;
    for branch in built.tree.branches() {
        output::info(&branch.iter().join(" <- "));
    }
    Ok(())
}

#[instrument(skip(container))]
fn _check(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let issues = container.hierarchy.check(file)?;
    if issues.is_empty() {
        output::success(&format!("{}: no issues", file.display()));
        return Ok(());
    }

    output::header(&format!("{}:", file.display()));
    for issue in &issues {
        output::failure(issue);
    }
    Err(ApplicationError::MalformedHierarchy {
        path: file.to_path_buf(),
        issues,
    }
    .into())
}

#[instrument]
fn _curry(op: FoldOp, arity: usize, args: &[i64]) -> CliResult<()> {
    let value = fold_curried(op, arity, args)?;
    output::action("result", &value);
    Ok(())
}

/// Feed `args` one at a time into a curried `op` of `arity` arguments.
fn fold_curried(op: FoldOp, arity: usize, args: &[i64]) -> CliResult<i64> {
    let curried = curry(Nary::new(arity, move |args: &[i64]| op.fold(args)))?;

    let mut application = curried.call(std::iter::empty());
    for (step, arg) in args.iter().enumerate() {
        if application.is_complete() {
            output::warning(&format!("ignoring surplus argument: {arg}"));
            continue;
        }
        application = application.apply(*arg)?;
        if let Application::Partial(partial) = &application {
            output::detail(&format!(
                "step {}: {:?}, awaiting {}",
                step + 1,
                partial.supplied(),
                partial.remaining()
            ));
        }
    }

    match application {
        Application::Complete(Some(value)) => Ok(value),
        Application::Complete(None) => Err(CliError::Overflow { op }),
        Application::Partial(partial) => Err(CliError::Usage(format!(
            "{} of {} arguments supplied",
            partial.supplied().len(),
            partial.arity()
        ))),
    }
}

fn _config(command: &ConfigCommands, config_dir: &Path) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(Some(config_dir))?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::warning("no global config directory"),
            }
            output::action("local", &local_config_path(config_dir).display());
        }
    }
    Ok(())
}
