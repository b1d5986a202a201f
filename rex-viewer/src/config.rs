//! Configuration for the viewer
//!
//! Settings are resolved with the precedence
//! CLI > environment variables > config file > defaults.
//! The config file lives at `<config dir>/rex-view/config.toml` unless
//! `--config` names another one.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use console_core::{GlyphSheet, Rgba, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest console accepted in either direction
const MAX_CONSOLE_CELLS: usize = 1024;

/// CLI arguments for the viewer
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "rex-view")]
#[command(version)]
#[command(about = "Show REXPaint .xp art on a console grid", long_about = None)]
pub struct CliArgs {
    /// REXPaint .xp file to display
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Path to custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Console width in cells
    #[arg(long, value_name = "COLS")]
    pub columns: Option<usize>,

    /// Console height in cells
    #[arg(long, value_name = "ROWS")]
    pub rows: Option<usize>,

    /// Column of the art's top-left corner
    #[arg(short, long, default_value_t = 0)]
    pub x: usize,

    /// Row of the art's top-left corner
    #[arg(short, long, default_value_t = 0)]
    pub y: usize,

    /// Text to lay out under the art
    #[arg(long, value_name = "TEXT")]
    pub caption: Option<String>,

    /// Wrap width of the caption (defaults to the rest of the row)
    #[arg(long, value_name = "COLS")]
    pub caption_width: Option<usize>,

    /// Console clear color (#RRGGBB)
    #[arg(long, value_name = "COLOR")]
    pub background: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

/// How the composed screen is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// 24-bit ANSI colored text
    #[default]
    Ansi,
    /// Plain text
    Text,
    /// JSON snapshot
    Json,
    /// JSON lines, one draw command per cell
    Draws,
}

impl OutputFormat {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ansi" => Some(Self::Ansi),
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "draws" => Some(Self::Draws),
            _ => None,
        }
    }
}

/// Console grid settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Clear color (hex)
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_columns() -> usize {
    128
}
fn default_rows() -> usize {
    48
}
fn default_background() -> String {
    "#000000".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: default_rows(),
            background: default_background(),
        }
    }
}

/// Caption colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextConfig {
    #[serde(default = "default_text_foreground")]
    pub foreground: String,
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_text_foreground() -> String {
    "#ffffff".to_string()
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            foreground: default_text_foreground(),
            background: default_background(),
        }
    }
}

/// Font sheet layout used for draw commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub columns: usize,
    pub cell_width: usize,
    pub cell_height: usize,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        let sheet = GlyphSheet::default();
        Self {
            columns: sheet.columns(),
            cell_width: sheet.cell_width(),
            cell_height: sheet.cell_height(),
        }
    }
}

/// Viewer configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub glyphs: GlyphConfig,
    #[serde(default)]
    pub output: OutputFormat,
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Config error in '{field}': {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    fn invalid(field: &str, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl Config {
    /// Load configuration with full precedence:
    /// CLI args > environment variables > config file > defaults
    pub fn load_with_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        let config_path = args.config.clone().or_else(Self::default_config_path);
        if let Some(path) = &config_path {
            if path.exists() {
                match Self::load_from_file(path) {
                    Ok(file_config) => config = file_config,
                    Err(e) => {
                        // Continue with defaults if the config file is invalid
                        log::warn!("{}", e);
                    }
                }
            }
        }

        config.apply_env_vars();
        config.apply_cli_args(args);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rex-view").join("config.toml"))
    }

    fn apply_env_vars(&mut self) {
        self.apply_env(|key| env::var(key).ok());
    }

    /// Apply `REXVIEW_*` variables read through `lookup`
    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(cols) = lookup("REXVIEW_COLUMNS").and_then(|v| v.parse().ok()) {
            self.console.columns = cols;
        }
        if let Some(rows) = lookup("REXVIEW_ROWS").and_then(|v| v.parse().ok()) {
            self.console.rows = rows;
        }
        if let Some(color) = lookup("REXVIEW_BACKGROUND") {
            self.console.background = color;
        }
        if let Some(output) = lookup("REXVIEW_OUTPUT").and_then(|v| OutputFormat::from_name(&v)) {
            self.output = output;
        }
    }

    fn apply_cli_args(&mut self, args: &CliArgs) {
        if let Some(cols) = args.columns {
            self.console.columns = cols;
        }
        if let Some(rows) = args.rows {
            self.console.rows = rows;
        }
        if let Some(color) = &args.background {
            self.console.background = color.clone();
        }
        if let Some(output) = args.output {
            self.output = output;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("console.columns", self.console.columns),
            ("console.rows", self.console.rows),
        ] {
            if value == 0 || value > MAX_CONSOLE_CELLS {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be between 1 and {}", MAX_CONSOLE_CELLS),
                ));
            }
        }

        if GlyphSheet::new(
            self.glyphs.columns,
            self.glyphs.cell_width,
            self.glyphs.cell_height,
        )
        .is_none()
        {
            return Err(ConfigError::invalid("glyphs", "dimensions must be non-zero"));
        }

        for (field, color) in [
            ("console.background", &self.console.background),
            ("text.foreground", &self.text.foreground),
            ("text.background", &self.text.background),
        ] {
            if Rgba::parse_hex(color).is_none() {
                return Err(ConfigError::invalid(
                    field,
                    format!("Invalid hex color '{}'. Expected format: #RRGGBB", color),
                ));
            }
        }

        Ok(())
    }

    pub fn console_size(&self) -> Size {
        Size::new(self.console.columns, self.console.rows)
    }

    pub fn background(&self) -> Rgba {
        Rgba::parse_hex(&self.console.background).unwrap_or(Rgba::BLACK)
    }

    pub fn text_colors(&self) -> (Rgba, Rgba) {
        (
            Rgba::parse_hex(&self.text.foreground).unwrap_or(Rgba::WHITE),
            Rgba::parse_hex(&self.text.background).unwrap_or(Rgba::BLACK),
        )
    }

    pub fn glyph_sheet(&self) -> GlyphSheet {
        GlyphSheet::new(
            self.glyphs.columns,
            self.glyphs.cell_width,
            self.glyphs.cell_height,
        )
        .unwrap_or_default()
    }
}
