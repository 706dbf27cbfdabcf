//! Configuration file loading for patchmeta.
//!
//! Discovers and loads `patchmeta.toml` next to the patch definition.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "patchmeta.toml";

/// Top-level configuration from patchmeta.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PatchmetaConfig {
    /// Output settings for `build`.
    pub output: OutputConfig,

    /// Product defaults applied to every definition.
    pub product: ProductConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Markdown,
}

/// Output section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

/// Product section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductConfig {
    /// Identity name used when a definition gives only a version.
    pub name: Option<String>,
}

/// Discover the patchmeta.toml config file in `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a patchmeta.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<PatchmetaConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<PatchmetaConfig> {
    let config: PatchmetaConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load `explicit` if given, otherwise discover in `dir`, otherwise defaults.
pub fn load_or_default(
    explicit: Option<&Utf8Path>,
    dir: &Utf8Path,
) -> anyhow::Result<PatchmetaConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(PatchmetaConfig::default()),
    }
}

/// Merged configuration combining config file and CLI arguments.
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    pub product_name: Option<String>,
}

/// Merges a loaded config with CLI arguments.
pub struct ConfigMerger {
    config: PatchmetaConfig,
}

impl ConfigMerger {
    pub fn new(config: PatchmetaConfig) -> Self {
        Self { config }
    }

    /// CLI values replace config values when given; `--compact` always disables pretty output.
    pub fn merge_build_args(
        self,
        cli_format: Option<OutputFormat>,
        cli_identity_name: Option<&str>,
        compact: bool,
    ) -> MergedConfig {
        MergedConfig {
            format: cli_format.unwrap_or(self.config.output.format),
            pretty: self.config.output.pretty && !compact,
            product_name: cli_identity_name
                .map(str::to_string)
                .or(self.config.product.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let contents = r#"
[output]
format = "yaml"
pretty = false

[product]
name = "base"
"#;

        let config = parse_config(contents).unwrap();
        assert_eq!(config.output.format, OutputFormat::Yaml);
        assert!(!config.output.pretty);
        assert_eq!(config.product.name.as_deref(), Some("base"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
        assert!(config.product.name.is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let err = parse_config("[output]\nformat = \"xml\"\n").expect_err("unknown format");
        assert!(err.to_string().contains("invalid TOML"));
    }

    #[test]
    fn test_merge_cli_overrides_config() {
        let config = PatchmetaConfig {
            output: OutputConfig {
                format: OutputFormat::Yaml,
                pretty: true,
            },
            product: ProductConfig {
                name: Some("from-config".to_string()),
            },
        };

        let merged =
            ConfigMerger::new(config).merge_build_args(Some(OutputFormat::Markdown), Some("cli"), true);

        assert_eq!(merged.format, OutputFormat::Markdown);
        assert!(!merged.pretty);
        assert_eq!(merged.product_name.as_deref(), Some("cli"));
    }

    #[test]
    fn test_merge_config_used_when_cli_absent() {
        let config = PatchmetaConfig {
            product: ProductConfig {
                name: Some("from-config".to_string()),
            },
            ..Default::default()
        };

        let merged = ConfigMerger::new(config).merge_build_args(None, None, false);

        assert_eq!(merged.format, OutputFormat::Json);
        assert!(merged.pretty);
        assert_eq!(merged.product_name.as_deref(), Some("from-config"));
    }

    #[test]
    fn test_discover_config_some_and_none() {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        assert!(discover_config(&root).is_none());

        std::fs::write(root.join(CONFIG_FILE_NAME), "").expect("write config");
        assert!(discover_config(&root).is_some());
    }

    #[test]
    fn test_explicit_config_wins_over_discovery() {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        std::fs::write(root.join(CONFIG_FILE_NAME), "[product]\nname = \"found\"\n")
            .expect("write config");
        let explicit = root.join("other.toml");
        std::fs::write(&explicit, "[product]\nname = \"explicit\"\n").expect("write config");

        let cfg = load_or_default(Some(&explicit), &root).expect("load explicit");
        assert_eq!(cfg.product.name.as_deref(), Some("explicit"));

        let cfg = load_or_default(None, &root).expect("load discovered");
        assert_eq!(cfg.product.name.as_deref(), Some("found"));
    }
}
