//! Command-line interface for browser-grid.
//!
//! Each invocation loads the persisted grid, applies one command to it over
//! headless surfaces, delivers the resulting surface callbacks and saves the
//! grid again. Command execution lives in the [`run`] submodule.

pub mod run;

use crate::config::LayoutMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// browser-grid - A grid of embedded browser panes
#[derive(Parser, Debug)]
#[command(name = "browser-grid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// State file to use instead of ~/.config/browser-grid/state.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Config file to use instead of ~/.config/browser-grid/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set debug log level (overrides config and RUST_LOG)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// List open panes with their URLs (the default)
    List,

    /// Open a new pane, optionally loading URL
    Open {
        /// Address to load in the new pane
        url: Option<String>,
    },

    /// Load TEXT in the pane at INDEX (blank text clears the pane)
    Navigate {
        index: usize,
        /// Address to load; a scheme is added when missing
        text: String,
    },

    /// Go back in the history of the pane at INDEX
    Back { index: usize },

    /// Go forward in the history of the pane at INDEX
    Forward { index: usize },

    /// Reload the pane at INDEX, or every pane when omitted
    Reload { index: Option<usize> },

    /// Close the first pane showing URL
    Close { url: String },

    /// Close the pane at INDEX
    CloseAt { index: usize },

    /// Close every pane
    CloseAll,

    /// Set the number of grid columns
    Columns { count: u32 },

    /// Set the number of grid rows
    Rows { count: u32 },

    /// Set the shared zoom (50-100, snapped to steps of 5)
    Zoom { percent: i64 },

    /// Set the layout mode: dynamic, 2x1, 2x2, 3x2, 3x3, 4x2 or 4x3
    Layout { mode: LayoutMode },

    /// Show or hide the opened-windows side menu
    ToggleMenu,

    /// Print the slot geometry of the current grid
    Slots {
        /// Viewport width in pixels (defaults to the configured width)
        #[arg(long)]
        width: Option<f32>,

        /// Viewport height in pixels (defaults to the configured height)
        #[arg(long)]
        height: Option<f32>,
    },
}

/// Runtime options passed from CLI to the command runner
#[derive(Clone, Debug)]
pub struct RuntimeOptions {
    /// Command to run
    pub command: Commands,
    /// State file override
    pub state_path: Option<PathBuf>,
    /// Config file override
    pub config_path: Option<PathBuf>,
    /// Log level override from CLI
    pub log_level: Option<log::LevelFilter>,
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        Self {
            command: cli.command.unwrap_or(Commands::List),
            state_path: cli.state,
            config_path: cli.config,
            log_level: cli.log_level.map(|l| l.to_level_filter()),
        }
    }
}

/// Parse CLI arguments into runtime options
pub fn process_cli() -> RuntimeOptions {
    Cli::parse().into()
}
