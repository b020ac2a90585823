use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
/// Configuration options for how converted values are printed.
pub struct OutputConfig {
    /// The string placed between converted values.
    pub separator: String,

    /// Determines whether each value is followed by its formatted length.
    pub show_length: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: "\n".into(),
            show_length: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
/// Configuration options for the converter front end.
pub struct FtConfig {
    /// Configuration options for the output.
    pub output: OutputConfig,
    /// The log level to control the verbosity of log messages.
    pub log_level: String,
}

impl Default for FtConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            log_level: "info".into(),
        }
    }
}

impl FtConfig {
    /// Attempt to load the configuration from the environment.
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let defaults = Self::default();

        let s = Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("output.separator", defaults.output.separator)?
            .set_default("output.show_length", defaults.output.show_length)?
            // Add in a default configuration file
            .add_source(File::with_name("conf/default").required(false))
            // Add in the current environment file
            // Default to 'development' env
            .add_source(File::with_name(&format!("conf/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(File::with_name("conf/local").required(false))
            // Add in settings from the environment (with a prefix of FT)
            // Eg.. `FT_LOG_LEVEL=debug ./target/ft-itoa 42` would set the `log_level` key
            .add_source(
                Environment::with_prefix("ft")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        s.try_deserialize()
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_ref()
    }

    pub fn separator(&self) -> &str {
        self.output.separator.as_ref()
    }

    pub fn show_length(&self) -> bool {
        self.output.show_length
    }
}
