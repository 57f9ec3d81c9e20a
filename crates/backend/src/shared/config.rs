use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub import: ImportConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ImportConfig {
    /// How many format/duplicate issues are listed before the "+N more" line
    #[serde(default = "default_issue_display_limit")]
    pub issue_display_limit: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExportConfig {
    /// File name without extension
    #[serde(default = "default_export_file_name")]
    pub file_name: String,
    #[serde(default = "default_export_sheet_name")]
    pub sheet_name: String,
    /// chrono format for the local-time "Upload Time" column
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// EnvFilter directive, overridden by RUST_LOG
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Optional log file (appended, no ANSI colors)
    #[serde(default)]
    pub file: Option<String>,
}

fn default_issue_display_limit() -> usize {
    5
}

fn default_export_file_name() -> String {
    "barcode_database_export".to_string()
}

fn default_export_sheet_name() -> String {
    "Barcodes".to_string()
}

fn default_datetime_format() -> String {
    "%d.%m.%Y %H:%M:%S".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            issue_display_limit: default_issue_display_limit(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_export_file_name(),
            sheet_name: default_export_sheet_name(),
            datetime_format: default_datetime_format(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            import: ImportConfig::default(),
            export: ExportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[import]
issue_display_limit = 5

[export]
file_name = "barcode_database_export"
sheet_name = "Barcodes"
datetime_format = "%d.%m.%Y %H:%M:%S"

[logging]
filter = "info"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Parse configuration text; missing sections and keys take defaults
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}
