/// Name of the configuration directory beside the global config file.
pub const CONFIG_DIR: &str = "cfg";
/// Subdirectory holding run configuration files.
pub const RUN_DIR: &str = "run";
/// Subdirectory holding module-scoped step configuration files.
pub const MODULES_DIR: &str = "modules";
/// Extension of all configuration files.
pub const CONFIG_EXT: &str = "yml";
