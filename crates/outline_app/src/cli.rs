use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use outline_core::{SettingsPatch, SidebarPosition};
use outline_engine::BlockViewport;

use crate::logging::LogDestination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    Left,
    Right,
}

impl From<Side> for SidebarPosition {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => SidebarPosition::Left,
            Side::Right => SidebarPosition::Right,
        }
    }
}

/// Print the prompt outline of a saved AI-chat page.
#[derive(Debug, Parser)]
#[command(name = "outline", version)]
pub struct Args {
    /// HTML snapshot of the chat page.
    pub file: PathBuf,

    /// Page URL or host, used to pick the platform adapter.
    #[arg(long)]
    pub origin: String,

    /// RON file overriding `OutlineConfig` fields.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the persisted settings file.
    #[arg(long, default_value = ".")]
    pub state_dir: PathBuf,

    /// Navigate to this prompt (1-based) after the first pass.
    #[arg(long)]
    pub select: Option<usize>,

    /// Print the outline as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Keep running and re-extract when the file changes.
    #[arg(long)]
    pub watch: bool,

    /// File polling interval in watch mode.
    #[arg(long, default_value_t = 200)]
    pub poll_ms: u64,

    #[arg(long, default_value_t = 800.0)]
    pub viewport_height: f64,

    /// Height of one laid-out text line, in pixels.
    #[arg(long, default_value_t = 20.0)]
    pub line_height: f64,

    #[arg(long, default_value_t = 80)]
    pub chars_per_line: usize,

    /// Flip and persist sidebar visibility.
    #[arg(long)]
    pub toggle: bool,

    #[arg(long, value_enum)]
    pub position: Option<Side>,

    #[arg(long, conflicts_with = "show_preview")]
    pub hide_preview: bool,

    #[arg(long)]
    pub show_preview: bool,

    #[arg(long, conflicts_with = "enable")]
    pub disable: bool,

    #[arg(long)]
    pub enable: bool,

    #[arg(long, value_enum, default_value_t = LogDestination::Off)]
    pub log: LogDestination,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn viewport(&self) -> BlockViewport {
        BlockViewport::new(self.viewport_height)
            .with_line_metrics(self.line_height, self.chars_per_line)
    }

    /// Settings changes requested on the command line.
    pub fn settings_patch(&self) -> SettingsPatch {
        SettingsPatch {
            enabled: flag(self.enable, self.disable),
            show_preview: flag(self.show_preview, self.hide_preview),
            sidebar_position: self.position.map(SidebarPosition::from),
        }
    }
}

fn flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
