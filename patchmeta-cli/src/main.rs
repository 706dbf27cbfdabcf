mod config;
mod definition;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use config::{ConfigMerger, MergedConfig, OutputFormat};
use fs_err as fs;
use patchmeta_builder::{BuildError, Patch};
use patchmeta_render::render_patch_md;
use serde::Serialize;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "patchmeta",
    version,
    about = "Build and validate immutable patch descriptors."
)]
struct Cli {
    /// Config file (default: patchmeta.toml next to the definition).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a patch definition and emit the frozen descriptor.
    Build(BuildArgs),
    /// Validate a patch definition without emitting it.
    Check(CheckArgs),
}

#[derive(Debug, Parser)]
struct BuildArgs {
    /// Patch definition file (TOML).
    #[arg(long)]
    definition: Utf8PathBuf,

    /// Output format (overrides config).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Write output here instead of stdout.
    #[arg(long)]
    out: Option<Utf8PathBuf>,

    /// Identity name for definitions that only give a version (overrides config).
    #[arg(long)]
    identity_name: Option<String>,

    /// Single-line JSON.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Patch definition file (TOML).
    #[arg(long)]
    definition: Utf8PathBuf,

    /// Identity name for definitions that only give a version (overrides config).
    #[arg(long)]
    identity_name: Option<String>,
}

/// Exit code 2 = invalid definition, 1 = tool error.
#[derive(Debug, thiserror::Error)]
enum ToolError {
    #[error("invalid patch definition: {0}")]
    Invalid(#[from] BuildError),
    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

impl ToolError {
    fn exit_code(&self) -> u8 {
        match self {
            ToolError::Invalid(_) => 2,
            ToolError::Internal(_) => 1,
        }
    }
}

/// Wire wrapper around a frozen patch.
#[derive(Serialize)]
struct PatchDocument<'a> {
    schema: &'static str,
    patch: &'a Patch,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.cmd {
        Command::Build(args) => cmd_build(cli.config.as_deref(), args),
        Command::Check(args) => cmd_check(cli.config.as_deref(), args),
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            error!("{:?}", e);
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn definition_dir(definition: &Utf8Path) -> Utf8PathBuf {
    match definition.parent() {
        Some(p) if !p.as_str().is_empty() => p.to_path_buf(),
        _ => Utf8PathBuf::from("."),
    }
}

fn load_merged(
    config_path: Option<&Utf8Path>,
    definition: &Utf8Path,
    format: Option<OutputFormat>,
    identity_name: Option<&str>,
    compact: bool,
) -> anyhow::Result<MergedConfig> {
    let file_config = config::load_or_default(config_path, &definition_dir(definition))
        .context("load patchmeta.toml config")?;
    let merged = ConfigMerger::new(file_config).merge_build_args(format, identity_name, compact);
    debug!(
        "merged config: format={:?}, pretty={}, product_name={:?}",
        merged.format, merged.pretty, merged.product_name
    );
    Ok(merged)
}

fn build_patch(definition: &Utf8Path, merged: &MergedConfig) -> Result<Patch, ToolError> {
    let def = definition::load_definition(definition)?;
    let patch = def
        .into_builder(merged.product_name.as_deref())
        .try_build()?;
    Ok(patch)
}

fn cmd_build(config_path: Option<&Utf8Path>, args: BuildArgs) -> Result<(), ToolError> {
    let merged = load_merged(
        config_path,
        &args.definition,
        args.format,
        args.identity_name.as_deref(),
        args.compact,
    )?;
    let patch = build_patch(&args.definition, &merged)?;
    let rendered = render(&patch, &merged)?;

    match &args.out {
        Some(out) => {
            fs::write(out, rendered.as_bytes()).with_context(|| format!("write {}", out))?;
            info!("wrote {}", out);
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn cmd_check(config_path: Option<&Utf8Path>, args: CheckArgs) -> Result<(), ToolError> {
    let merged = load_merged(
        config_path,
        &args.definition,
        None,
        args.identity_name.as_deref(),
        false,
    )?;
    let patch = build_patch(&args.definition, &merged)?;
    println!(
        "ok: {} ({}, {} modifications, {} elements)",
        patch.patch_id(),
        patch.patch_type(),
        patch.modifications().len(),
        patch.elements().len()
    );
    Ok(())
}

fn render(patch: &Patch, merged: &MergedConfig) -> anyhow::Result<String> {
    let doc = PatchDocument {
        schema: patchmeta_types::schema::PATCHMETA_PATCH_V1,
        patch,
    };
    let out = match merged.format {
        OutputFormat::Json if merged.pretty => {
            let mut s = serde_json::to_string_pretty(&doc).context("serialize patch json")?;
            s.push('\n');
            s
        }
        OutputFormat::Json => {
            let mut s = serde_json::to_string(&doc).context("serialize patch json")?;
            s.push('\n');
            s
        }
        OutputFormat::Yaml => serde_yaml::to_string(&doc).context("serialize patch yaml")?,
        OutputFormat::Markdown => render_patch_md(patch),
    };
    Ok(out)
}
