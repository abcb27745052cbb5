use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub dispatch: DispatchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Prefix for action endpoints; empty means same origin
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DispatchConfig {
    /// Reject a second dispatch of the same command for the same subject
    /// while the first one is still pending
    #[serde(default = "default_guard_in_flight")]
    pub guard_in_flight: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_guard_in_flight() -> bool {
    true
}

fn default_level() -> String {
    "debug".to_string()
}

/// Level the console logger is installed at. The configured level is applied
/// afterwards through `log::set_max_level`, so it must not exceed this.
pub const CONSOLE_LOG_CEILING: log::Level = log::Level::Trace;

impl LoggingConfig {
    /// Falls back to `Info` for an unrecognised level name
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Info)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[dispatch]
guard_in_flight = true

[logging]
level = "debug"
"#;

/// Id of the optional inline `<script type="application/toml">` element that
/// overrides the embedded configuration
pub const CONFIG_ELEMENT_ID: &str = "admin-console-config";

/// Load configuration
///
/// Search order:
/// 1. The page-provided override, if any and if it parses
/// 2. Falls back to embedded default config
pub fn load_config(page_override: Option<&str>) -> anyhow::Result<ClientConfig> {
    if let Some(contents) = page_override {
        match toml::from_str::<ClientConfig>(contents) {
            Ok(config) => {
                log::info!("Loading config from page element #{}", CONFIG_ELEMENT_ID);
                return Ok(config);
            }
            Err(e) => {
                log::warn!("Invalid config in #{}: {}", CONFIG_ELEMENT_ID, e);
            }
        }
    }

    log::info!("Using default embedded configuration");
    let config: ClientConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Read the override text from the current document
pub fn read_page_override() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}
