/// Application name, used for the user config directory.
pub const APP_NAME: &str = "foreman";

/// File name of the package manifest inside an application directory.
pub const MANIFEST_FILENAME: &str = "composer.json";

/// Default file name of the editor configuration.
pub const CONFIG_FILENAME: &str = "foreman.json";

/// Environment variable that points at an editor configuration file.
pub const CONFIG_ENV_VAR: &str = "FOREMAN_CONFIG";
