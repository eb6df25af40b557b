use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, IoResultExt, TraversalService};
use crate::cli::args::{Cli, Commands, TreeInput};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{OutputFormat, Settings};
use crate::domain::TreeDisplay;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Traverse {
            input,
            capacity,
            verify,
            format,
            show_tree,
        }) => {
            let mut settings = Settings::load()?;
            settings.capacity = capacity.or(settings.capacity);
            settings.verify |= *verify;
            settings.format = format.unwrap_or(settings.format);
            _traverse(input, settings, *show_tree)
        }
        Some(Commands::Render { input }) => _render(input),
        Some(Commands::Config) => _config(),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::InvalidArgs(
            "no command given, see --help".to_string(),
        )),
    }
}

/// Resolve the tree text from an argument, a file, or stdin (`-`).
fn read_input(service: &TraversalService, input: &TreeInput) -> CliResult<String> {
    match (&input.tree, &input.file) {
        (_, Some(path)) => Ok(service.read_file(path)?),
        (Some(tree), None) if tree == "-" => {
            Ok(io::read_to_string(io::stdin()).with_context("read tree from stdin")?)
        }
        (Some(tree), None) => Ok(tree.clone()),
        (None, None) => Err(CliError::InvalidArgs(
            "provide a tree, --file, or '-' for stdin".to_string(),
        )),
    }
}

/// Format traversal values for output.
pub fn format_values(values: &[i32], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Plain => Ok(values
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(" ")),
        OutputFormat::Json => serde_json::to_string(values).map_err(|e| {
            CliError::Application(ApplicationError::OperationFailed {
                context: "serialize result".to_string(),
                source: Box::new(e),
            })
        }),
    }
}

#[instrument(skip(input))]
fn _traverse(input: &TreeInput, settings: Settings, show_tree: bool) -> CliResult<()> {
    let service = TraversalService::new(settings);
    let text = read_input(&service, input)?;
    let root = service.parse(&text)?;

    if show_tree {
        output::header("tree");
        output::info(&root.as_deref().to_tree_string()?);
        output::header("inorder");
    }

    let report = service.traverse(root.as_deref())?;
    debug!(?report, "traversed");
    output::info(&format_values(&report.values, service.settings().format)?);
    Ok(())
}

#[instrument(skip(input))]
fn _render(input: &TreeInput) -> CliResult<()> {
    let service = TraversalService::new(Settings::default());
    let text = read_input(&service, input)?;
    let root = service.parse(&text)?;
    output::info(&root.as_deref().to_tree_string()?);
    Ok(())
}

#[instrument]
fn _config() -> CliResult<()> {
    let settings = Settings::load()?;
    output::info(&settings.to_toml()?);
    Ok(())
}
