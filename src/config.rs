//! Board Configuration
//!
//! Endpoint and log level, fixed at build time, plus the column table.

use log::LevelFilter;

use crate::models::ColumnId;

/// Task endpoint used when `KANBAN_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/tasks";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Collection URL of the task service (`GET`/`POST` here, `PUT` on `{url}/{id}`)
    pub api_url: String,
    pub log_level: LevelFilter,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl BoardConfig {
    /// Read overrides baked in by the build environment
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("KANBAN_API_URL"), option_env!("KANBAN_LOG_LEVEL"))
    }

    fn from_overrides(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse::<LevelFilter>().ok()) {
            config.log_level = level;
        }
        config
    }
}

/// Display metadata for one column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDef {
    pub id: ColumnId,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const COLUMN_DEFS: [ColumnDef; 4] = [
    ColumnDef { id: ColumnId::Backlog, name: "Backlog", icon: "🎒", color: "#2196f3" },
    ColumnDef { id: ColumnId::Design, name: "Design", icon: "🎨", color: "#9c27b0" },
    ColumnDef { id: ColumnId::Todo, name: "To-Do", icon: "🤔", color: "#f44336" },
    ColumnDef { id: ColumnId::Doing, name: "Doing", icon: "🤓", color: "#ff5722" },
];

pub fn column_def(id: ColumnId) -> &'static ColumnDef {
    // COLUMN_DEFS lists the variants in declaration order
    &COLUMN_DEFS[id as usize]
}
