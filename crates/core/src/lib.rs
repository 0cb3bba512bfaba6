pub mod config;
pub mod failed;
pub mod janitor;
pub mod layout;
pub mod metadata;
pub mod organizer;
pub mod placer;

pub use config::{
    load_config, load_config_from_str, validate_config, CommonConfig, Config, ConfigError,
    EscapeConfig, NameRuleConfig,
};
pub use failed::{route_failure, FailureDisposition, RouterError};
pub use janitor::remove_empty_dirs;
pub use layout::{build_folder_name, resolve_folder, sanitize, LayoutError, LocationRule};
pub use metadata::{Field, MediaRecord};
pub use organizer::{OrganizeError, Organizer};
pub use placer::{
    FsPlacer, Placer, PlacementMode, PlacementOutcome, PlacementRequest, PlacementStrategy,
    PlacerError,
};
