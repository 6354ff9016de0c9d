pub mod cli;
pub mod clone;
pub mod config;
pub mod directive;
pub mod error;
pub mod inventory;
pub mod request;
pub mod script;

pub use error::CloneError;

use std::io::Write;

use anyhow::{Context, Result};
use clap::CommandFactory;
use tracing::info;
use tracing_subscriber::{FmtSubscriber, filter::LevelFilter};

pub fn init_logging(log_level: cli::LogLevel) -> Result<()> {
    let filter = match log_level {
        cli::LogLevel::Trace => LevelFilter::TRACE,
        cli::LogLevel::Debug => LevelFilter::DEBUG,
        cli::LogLevel::Info => LevelFilter::INFO,
        cli::LogLevel::Warn => LevelFilter::WARN,
        cli::LogLevel::Error => LevelFilter::ERROR,
    };

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .context("failed to set global default tracing subscriber")
}

/// Loads, validates and compiles a manifest, writing the result to `out`.
pub fn run_compile(opts: &cli::CompileArgs, out: &mut dyn Write) -> Result<()> {
    let manifest = config::load_manifest(opts.file.as_path())
        .with_context(|| format!("failed to load manifest from {}", opts.file))?;
    manifest.validate().context("manifest validation failed")?;

    let placement = manifest.resolve()?;
    let topology = manifest.topology();
    let params = clone::prepare_clone_task(
        &manifest.request,
        placement.host,
        placement.datastore,
        &topology,
    );

    let rendered = match opts.output {
        cli::OutputFormat::Yaml => {
            serde_yaml::to_string(&params).context("failed to serialize clone parameters")?
        }
        cli::OutputFormat::Script => {
            let template = manifest.request.source.as_ref().ok_or_else(|| {
                CloneError::Validation(
                    "request.source is required to render the clone script".to_string(),
                )
            })?;
            let mut script = script::render_clone_script(&params, template);
            script.push('\n');
            script
        }
    };

    out.write_all(rendered.as_bytes())
        .context("failed to write compile output")?;
    info!("compiled clone task for {}", params.name);
    Ok(())
}

pub fn run_validate(opts: &cli::ValidateArgs) -> Result<()> {
    let manifest = config::load_manifest(opts.file.as_path())
        .with_context(|| format!("failed to load manifest from {}", opts.file))?;
    manifest.validate().context("manifest validation failed")?;
    info!("validation successful:\n{:#?}", manifest);
    Ok(())
}

/// Writes a completion script for `opts.shell` to `out`.
pub fn run_completions(opts: &cli::CompletionsArgs, out: &mut dyn Write) {
    let mut cmd = cli::Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(opts.shell, &mut cmd, name, out);
}
