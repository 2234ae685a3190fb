use crate::{configuration::ConversionOptions, error::Error};
use serde::Serialize;
use std::{collections::BTreeMap, path::Path};

pub const RC_FILE_NAME: &str = "devproxyrc.json";

const RETRY_AFTER_PLUGIN: &str = "RetryAfterPlugin";
const RANDOM_ERROR_PLUGIN: &str = "GenericRandomErrorPlugin";

/// Name of the collection being converted, taken from the output folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionName(String);

impl SectionName {
    pub fn from_output_folder<P: AsRef<Path>>(output_folder: P) -> Result<Self, Error> {
        let output_folder = output_folder.as_ref();
        let name = output_folder
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::InvalidOutputFolder(output_folder.to_path_buf()))?;

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn errors_file_name(&self) -> String {
        format!("errors-{}.json", self.0)
    }

    /// `errors` followed by the section name with its first letter capitalized.
    pub fn config_section(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => format!("errors{}{}", first.to_uppercase(), chars.as_str()),
            None => String::from("errors"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevProxyRc {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub plugins: Vec<PluginDescriptor>,
    pub urls_to_watch: Vec<String>,
    pub rate: u32,
    pub log_level: String,
    pub new_version_notification: String,
    #[serde(flatten)]
    pub sections: BTreeMap<String, ErrorsSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
    pub name: String,
    pub enabled: bool,
    pub plugin_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_section: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorsSection {
    pub errors_file: String,
}

impl DevProxyRc {
    pub fn new<S: Into<String>>(
        section: &SectionName,
        watch_pattern: S,
        options: &ConversionOptions,
    ) -> Self {
        let config_section = section.config_section();

        let plugins = vec![
            PluginDescriptor {
                name: RETRY_AFTER_PLUGIN.into(),
                enabled: true,
                plugin_path: options.plugin_path().into(),
                config_section: None,
            },
            PluginDescriptor {
                name: RANDOM_ERROR_PLUGIN.into(),
                enabled: true,
                plugin_path: options.plugin_path().into(),
                config_section: Some(config_section.clone()),
            },
        ];

        let mut sections = BTreeMap::new();
        sections.insert(
            config_section,
            ErrorsSection {
                errors_file: section.errors_file_name(),
            },
        );

        Self {
            schema: options.schema_url().into(),
            plugins,
            urls_to_watch: vec![watch_pattern.into()],
            rate: options.rate(),
            log_level: options.log_level().into(),
            new_version_notification: options.new_version_notification().into(),
            sections,
        }
    }
}
