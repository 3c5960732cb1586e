//! TOML configuration for message templates and decoding.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::decode::{EntityDecoder, HtmlEntityDecoder, PlainDecoder};
use crate::error::ToastError;
use crate::notifier::Notifier;
use crate::reporter::ErrorReporter;
use crate::template::{
    MessageTemplates, TemplateError, DEFAULT_GENERAL_PREFIX, DEFAULT_GRAPHQL_PREFIX,
    DEFAULT_NETWORK_PREFIX, MESSAGE_PLACEHOLDER,
};

/// Environment variable the CLI reads the config path from.
pub const CONFIG_ENV_VAR: &str = "GQLTOAST_CONFIG";

/// Every key is optional; an empty file gives the built-in behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToastConfig {
    /// Decode HTML entities in summary messages.
    pub decode_entities: bool,
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    pub network: String,
    pub graphql: String,
    pub general: String,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            decode_entities: true,
            templates: TemplateConfig::default(),
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        let with_message = |prefix: &str| format!("{}{{{}}}", prefix, MESSAGE_PLACEHOLDER);
        Self {
            network: with_message(DEFAULT_NETWORK_PREFIX),
            graphql: with_message(DEFAULT_GRAPHQL_PREFIX),
            general: with_message(DEFAULT_GENERAL_PREFIX),
        }
    }
}

impl ToastConfig {
    /// Parses TOML and checks that every template is usable.
    pub fn from_toml_str(content: &str) -> Result<Self, ToastError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ToastError::Config(e.to_string()))?;
        config.message_templates().map_err(|e| {
            tracing::warn!("Rejected message template: {}", e);
            ToastError::Template(e)
        })?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ToastError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!("Failed to read config {}: {}", path.display(), e);
            ToastError::Io(e)
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn message_templates(&self) -> Result<MessageTemplates, TemplateError> {
        MessageTemplates::new(
            &self.templates.network,
            &self.templates.graphql,
            &self.templates.general,
        )
    }

    pub fn decoder(&self) -> Box<dyn EntityDecoder> {
        if self.decode_entities {
            Box::new(HtmlEntityDecoder)
        } else {
            Box::new(PlainDecoder)
        }
    }

    pub fn build_reporter<N: Notifier>(
        &self,
        notifier: N,
    ) -> Result<ErrorReporter<N, Box<dyn EntityDecoder>>, ToastError> {
        let templates = self.message_templates()?;
        Ok(ErrorReporter::new(notifier)
            .with_decoder(self.decoder())
            .with_templates(templates))
    }
}
