//! Configuration loading and parsing.
//!
//! Reads `psedit.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [editor]
//! tab_width = 4
//! page_rows = 20
//! backup = true
//! ```
//!
//! Missing keys take their defaults; unknown keys are ignored. A missing or
//! unparsable file yields the defaults. Raw values are kept so that a resize can
//! re-clamp `page_rows` against the new text height; `Config::apply_context`
//! produces the effective `EditSettings`.

use anyhow::Result;
use core_state::EditSettings;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "psedit.toml";
pub const MAX_TAB_WIDTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigContext {
    pub viewport_rows: u16,
    pub status_rows: u16,
}

impl ConfigContext {
    pub fn new(viewport_rows: u16, status_rows: u16) -> Self {
        Self {
            viewport_rows,
            status_rows,
        }
    }

    /// Context for the editor's layout: one status row.
    pub fn from_viewport_height(viewport_rows: u16) -> Self {
        Self::new(viewport_rows, 1)
    }

    pub fn text_rows(&self) -> u16 {
        self.viewport_rows.saturating_sub(self.status_rows)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_tab_width")]
    pub tab_width: usize,
    #[serde(default = "EditorConfig::default_page_rows")]
    pub page_rows: usize,
    #[serde(default = "EditorConfig::default_backup")]
    pub backup: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: Self::default_tab_width(),
            page_rows: Self::default_page_rows(),
            backup: Self::default_backup(),
        }
    }
}

impl EditorConfig {
    const fn default_tab_width() -> usize {
        EditSettings::DEFAULT_TAB_WIDTH
    }
    const fn default_page_rows() -> usize {
        EditSettings::DEFAULT_PAGE_ROWS
    }
    const fn default_backup() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Original file contents when one was read and parsed.
    pub raw: Option<String>,
    pub file: ConfigFile,
    pub effective: EditSettings,
}

/// Best-effort config path: `./psedit.toml` first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("psedit").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "loaded");
            let effective = EditSettings {
                tab_width: file.editor.tab_width,
                page_rows: file.editor.page_rows,
                backup: file.editor.backup,
            };
            Ok(Config {
                raw: Some(content),
                file,
                effective,
            })
        }
        Err(e) => {
            warn!(
                target: "config",
                path = %path.display(),
                error = %e,
                "parse failed, using defaults"
            );
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Clamp raw values against the viewport and store the result in `effective`.
    pub fn apply_context(&mut self, ctx: ConfigContext) -> EditSettings {
        let raw = &self.file.editor;

        let tab_width = raw.tab_width.clamp(1, MAX_TAB_WIDTH);
        if tab_width != raw.tab_width {
            info!(
                target: "config",
                raw = raw.tab_width,
                clamped = tab_width,
                max = MAX_TAB_WIDTH,
                "tab_width_clamped"
            );
        }

        let text_rows = usize::from(ctx.text_rows()).max(1);
        let page_rows = raw.page_rows.clamp(1, text_rows);
        if page_rows != raw.page_rows {
            info!(
                target: "config",
                raw = raw.page_rows,
                clamped = page_rows,
                text_rows,
                viewport_rows = ctx.viewport_rows,
                status_rows = ctx.status_rows,
                "page_rows_clamped"
            );
        }

        self.effective = EditSettings {
            tab_width,
            page_rows,
            backup: raw.backup,
        };
        self.effective
    }

    /// Shortcut for a context with a single status row below the text rows.
    pub fn apply_viewport_height(&mut self, viewport_height: u16) -> EditSettings {
        self.apply_context(ConfigContext::from_viewport_height(viewport_height))
    }

    /// Recompute after a viewport change. `Some(settings)` when the effective
    /// values changed.
    pub fn recompute_after_resize(&mut self, new_viewport_height: u16) -> Option<EditSettings> {
        let prev = self.effective;
        let current = self.apply_viewport_height(new_viewport_height);
        (current != prev).then_some(current)
    }
}
