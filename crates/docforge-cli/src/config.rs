//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`DOCFORGE_*`, `__` as section separator)
//! 3. Config file (`--config <FILE>`, or `docforge.toml` in the CWD, or
//!    the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory that holds all documentation projects; a new project
    /// lands at `{projects_dir}/{slug}`.
    pub projects_dir: PathBuf,
    /// Reference incident template copied into the Incidents folder when
    /// present. Absent file = silent skip.
    pub incident_template: Option<PathBuf>,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            projects_dir: PathBuf::from("docs/projects"),
            incident_template: Some(PathBuf::from(
                "docs/projects/project-a-superapp/99-incidents/template-incident.md",
            )),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (required
    /// to exist); with `None`, `docforge.toml` in the CWD and the platform
    /// config dir are consulted, both optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("projects_dir", defaults.projects_dir.display().to_string())?
            .set_default("output.no_color", false)?;
        if let Some(template) = &defaults.incident_template {
            builder = builder.set_default("incident_template", template.display().to_string())?;
        }

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.clone())),
            None => builder
                .add_source(config::File::from(Self::config_path()).required(false))
                .add_source(config::File::with_name("docforge").required(false)),
        };

        builder = builder.add_source(
            config::Environment::with_prefix("DOCFORGE").separator("__"),
        );

        let cfg = builder.build()?.try_deserialize::<Self>()?;
        Ok(cfg)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `docforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "techave", "docforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("docforge.toml"))
    }
}
