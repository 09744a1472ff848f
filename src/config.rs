//! Application configuration: TOML file loading, CLI overrides, and defaults.
//!
//! Resolution order (first found wins, values merge/override):
//! 1. CLI flags (`--config`, `--theme`, `--no-mouse`, `--seed`)
//! 2. `$IDEFOLIO_CONFIG` environment variable (path to config file)
//! 3. Project-local `.idefolio.toml` in the current working directory
//! 4. Global `~/.config/idefolio/config.toml`
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, Result};

// ── Section configs ──────────────────────────────────────────────────────────

/// General application settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Clock/render tick interval in milliseconds.
    pub tick_ms: Option<u64>,
    /// Enable mouse support.
    pub mouse: Option<bool>,
}

/// Workspace seeding: which folders start expanded and which tabs start open.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Folder paths expanded at startup. `None` means "all root folders".
    pub expanded_folders: Option<Vec<String>>,
    /// File paths opened as tabs at startup (last one becomes active).
    pub open_files: Option<Vec<String>>,
}

/// Content-provider table: well-known logical names mapped to VFS paths,
/// consumed by the terminal's opening commands. Swappable without touching
/// the interpreter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentPaths {
    pub about: String,
    pub skills: String,
    pub projects: String,
    pub experience: String,
    pub education: String,
    pub contact: String,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            about: "portfolio/about.java".to_string(),
            skills: "skills/backend.xml".to_string(),
            projects: "projects/port-advancer.java".to_string(),
            experience: "experience/paypal.java".to_string(),
            education: "education/mca.md".to_string(),
            contact: "portfolio/contact.json".to_string(),
        }
    }
}

/// Color settings for a single theme palette.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeColorsConfig {
    pub sidebar_bg: Option<String>,
    pub sidebar_fg: Option<String>,
    pub selected_bg: Option<String>,
    pub selected_fg: Option<String>,
    pub folder_fg: Option<String>,
    pub file_fg: Option<String>,
    pub editor_bg: Option<String>,
    pub editor_fg: Option<String>,
    pub line_nr_fg: Option<String>,
    pub status_bg: Option<String>,
    pub status_fg: Option<String>,
    pub border_fg: Option<String>,
    pub tab_active_bg: Option<String>,
    pub tab_inactive_fg: Option<String>,
}

/// Theme configuration section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color scheme: "dark", "light".
    pub scheme: Option<String>,
    /// Custom color overrides.
    pub custom: Option<ThemeColorsConfig>,
}

// ── Top-level config ─────────────────────────────────────────────────────────

/// Top-level application configuration.
///
/// All fields are optional so that partial configs from different sources
/// can be merged together (CLI overrides file, file overrides defaults).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub workspace: WorkspaceConfig,
    pub content: Option<ContentPaths>,
    pub theme: ThemeConfig,
}

/// Default tick interval (drives the status-bar clock).
pub const DEFAULT_TICK_MS: u64 = 250;

// ── Config file locator ──────────────────────────────────────────────────────

/// Return the list of candidate config file paths in priority order.
///
/// Does NOT include the CLI `--config` path — that is handled separately.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. $IDEFOLIO_CONFIG environment variable
    if let Ok(env_path) = std::env::var("IDEFOLIO_CONFIG") {
        paths.push(PathBuf::from(env_path));
    }

    // 2. Project-local `.idefolio.toml` in CWD
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".idefolio.toml"));
    }

    // 3. Global `~/.config/idefolio/config.toml`
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("idefolio").join("config.toml"));
    }

    paths
}

/// Try to read and parse a TOML config file. Returns `None` if the file
/// doesn't exist or can't be parsed (with a warning logged).
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return None,
    };
    match toml::from_str::<AppConfig>(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to parse config file");
            None
        }
    }
}

// ── Merge logic ──────────────────────────────────────────────────────────────

impl AppConfig {
    /// Merge `other` on top of `self` — `other`'s `Some` values win.
    pub fn merge(self, other: &AppConfig) -> AppConfig {
        AppConfig {
            general: GeneralConfig {
                tick_ms: other.general.tick_ms.or(self.general.tick_ms),
                mouse: other.general.mouse.or(self.general.mouse),
            },
            workspace: WorkspaceConfig {
                expanded_folders: other
                    .workspace
                    .expanded_folders
                    .clone()
                    .or(self.workspace.expanded_folders),
                open_files: other
                    .workspace
                    .open_files
                    .clone()
                    .or(self.workspace.open_files),
            },
            content: other.content.clone().or(self.content),
            theme: ThemeConfig {
                scheme: other.theme.scheme.clone().or(self.theme.scheme),
                custom: other.theme.custom.clone().or(self.theme.custom),
            },
        }
    }

    /// Load configuration by merging every existing candidate file, lowest
    /// priority first, so higher-priority files override field by field.
    ///
    /// Discovered candidates are best effort: unreadable or unparsable ones
    /// are skipped with a warning. An explicit path (`--config`) merges last
    /// and must be readable and valid, since the user asked for that file.
    pub fn load(explicit: Option<&Path>) -> Result<AppConfig> {
        let mut cfg = AppConfig::default();
        for path in candidate_paths().iter().rev() {
            if let Some(found) = load_file(path) {
                cfg = cfg.merge(&found);
            }
        }
        if let Some(path) = explicit {
            let text = std::fs::read_to_string(path)
                .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
            let found: AppConfig = toml::from_str(&text)
                .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
            cfg = cfg.merge(&found);
        }
        Ok(cfg)
    }

    pub fn tick_ms(&self) -> u64 {
        self.general.tick_ms.unwrap_or(DEFAULT_TICK_MS)
    }

    pub fn content_paths(&self) -> ContentPaths {
        self.content.clone().unwrap_or_default()
    }
}
