pub const DEFAULT_SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/microsoft/dev-proxy/main/schemas/v0.20.0/rc.schema.json";
pub const DEFAULT_PLUGIN_PATH: &str = "~appFolder/plugins/dev-proxy-plugins.dll";
pub const DEFAULT_RATE: u32 = 50;
pub const DEFAULT_LOG_LEVEL: &str = "information";
pub const DEFAULT_NEW_VERSION_NOTIFICATION: &str = "stable";

/// What to do with a recorded error response whose body isn't valid JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedBodyPolicy {
    /// Fail the whole conversion, nothing is written.
    Abort,
    /// Leave the response out of its error group.
    Skip,
}

#[derive(Debug, Clone)]
pub struct ConversionOptions {
    malformed_body_policy: MalformedBodyPolicy,
    schema_url: String,
    plugin_path: String,
    rate: u32,
    log_level: String,
    new_version_notification: String,
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self {
            malformed_body_policy: MalformedBodyPolicy::Abort,
            schema_url: DEFAULT_SCHEMA_URL.into(),
            plugin_path: DEFAULT_PLUGIN_PATH.into(),
            rate: DEFAULT_RATE,
            log_level: DEFAULT_LOG_LEVEL.into(),
            new_version_notification: DEFAULT_NEW_VERSION_NOTIFICATION.into(),
        }
    }

    pub fn set_malformed_body_policy(&mut self, policy: MalformedBodyPolicy) {
        self.malformed_body_policy = policy;
    }

    pub fn malformed_body_policy(&self) -> MalformedBodyPolicy {
        self.malformed_body_policy
    }

    pub fn set_schema_url<S: Into<String>>(&mut self, schema_url: S) {
        self.schema_url = schema_url.into();
    }

    pub fn schema_url(&self) -> &str {
        &self.schema_url
    }

    pub fn set_plugin_path<S: Into<String>>(&mut self, plugin_path: S) {
        self.plugin_path = plugin_path.into();
    }

    pub fn plugin_path(&self) -> &str {
        &self.plugin_path
    }

    /// Percentage of watched requests the proxy fails.
    pub fn set_rate(&mut self, rate: u32) {
        self.rate = rate;
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }

    pub fn set_log_level<S: Into<String>>(&mut self, log_level: S) {
        self.log_level = log_level.into();
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn set_new_version_notification<S: Into<String>>(&mut self, value: S) {
        self.new_version_notification = value.into();
    }

    pub fn new_version_notification(&self) -> &str {
        &self.new_version_notification
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self::new()
    }
}
