use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::placer::PlacementMode;

/// Main processing mode value that records failures instead of moving them.
pub const MAIN_MODE_LIST_ONLY: u8 = 3;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub name_rule: NameRuleConfig,
    #[serde(default)]
    pub escape: EscapeConfig,
}

/// Output folders and processing modes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommonConfig {
    /// Library root for successfully organized items.
    #[serde(default = "default_success_folder")]
    pub success_output_folder: PathBuf,
    /// Root for failed items and their record files.
    #[serde(default = "default_failed_folder")]
    pub failed_output_folder: PathBuf,
    /// Main processing mode; 3 only records failures, never moves them.
    #[serde(default = "default_main_mode")]
    pub main_mode: u8,
    /// 0 = move, 1 = soft link, 2 = hard link with soft-link fallback.
    /// Unrecognized values behave as 0.
    #[serde(default)]
    pub link_mode: u8,
    /// Physically move failed files into the failed folder.
    #[serde(default)]
    pub failed_move: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            success_output_folder: default_success_folder(),
            failed_output_folder: default_failed_folder(),
            main_mode: default_main_mode(),
            link_mode: 0,
            failed_move: false,
        }
    }
}

impl CommonConfig {
    /// The placement mode selected by the integer link mode.
    pub fn placement_mode(&self) -> PlacementMode {
        PlacementMode::from_raw(self.link_mode)
    }

    /// True when the main mode only records failures.
    pub fn is_list_only(&self) -> bool {
        self.main_mode == MAIN_MODE_LIST_ONLY
    }
}

fn default_success_folder() -> PathBuf {
    PathBuf::from("output")
}

fn default_failed_folder() -> PathBuf {
    PathBuf::from("failed")
}

fn default_main_mode() -> u8 {
    1
}

/// Folder naming rule
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NameRuleConfig {
    /// Template expression for the destination folder, e.g.
    /// `"actor + '/' + number"`.
    #[serde(default = "default_location_rule")]
    pub location_rule: String,
    /// Longest title kept in generated paths; 0 leaves titles unbounded.
    #[serde(default)]
    pub max_title_len: usize,
    /// Performer strings longer than this (in characters) are treated as
    /// multi-performer works; 0 disables the rewrite.
    #[serde(default = "default_multi_performer_threshold")]
    pub multi_performer_threshold: usize,
    /// Label substituted for the performer list of multi-performer works.
    #[serde(default = "default_multi_performer_label")]
    pub multi_performer_label: String,
}

impl Default for NameRuleConfig {
    fn default() -> Self {
        Self {
            location_rule: default_location_rule(),
            max_title_len: 0,
            multi_performer_threshold: default_multi_performer_threshold(),
            multi_performer_label: default_multi_performer_label(),
        }
    }
}

fn default_location_rule() -> String {
    "actor + '/' + number".to_string()
}

fn default_multi_performer_threshold() -> usize {
    100
}

fn default_multi_performer_label() -> String {
    "Multiple Performers".to_string()
}

/// Characters stripped from generated paths
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EscapeConfig {
    /// Each character in this string is removed from generated paths.
    /// Separators survive regardless.
    #[serde(default = "default_literals")]
    pub literals: String,
}

impl Default for EscapeConfig {
    fn default() -> Self {
        Self {
            literals: default_literals(),
        }
    }
}

fn default_literals() -> String {
    "\\()".to_string()
}
