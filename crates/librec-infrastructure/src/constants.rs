//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "LIBREC";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "librec.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "librec";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable consulted for log filtering
pub const LOG_FILTER_ENV: &str = "LIBREC_LOG";

/// Default Ollama server port
pub const OLLAMA_DEFAULT_PORT: u16 = 11434;
