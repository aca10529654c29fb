pub mod paths;
pub mod settings;

pub use paths::DataPaths;
pub use settings::{get_settings, load_settings_from, load_settings_or_default, PlannerSettings};
