//! Startup configuration for the task list application.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Renderer used when printing tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RendererKind {
    /// `- {id}: {text}` lines.
    #[default]
    Plain,
    /// `{id},{text},{level}` lines.
    Csv,
    /// One JSON object per line.
    Json,
}

impl RendererKind {
    /// Returns the canonical configuration name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RendererKind {
    type Error = ParseRendererKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "plain" => Ok(Self::Plain),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(ParseRendererKindError(value.to_owned())),
        }
    }
}

impl FromStr for RendererKind {
    type Err = ParseRendererKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

/// Error returned while parsing a renderer name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown renderer '{0}', expected plain, csv or json")]
pub struct ParseRendererKindError(pub String);

/// Application configuration resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
    renderer: RendererKind,
}

impl AppConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the renderer used by the task printer.
    #[must_use]
    pub const fn with_renderer(mut self, renderer: RendererKind) -> Self {
        self.renderer = renderer;
        self
    }

    /// Returns the configured renderer.
    #[must_use]
    pub const fn renderer(&self) -> RendererKind {
        self.renderer
    }
}
