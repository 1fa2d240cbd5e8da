use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub confirm: ConfirmConfig,
    #[serde(default)]
    pub typeahead: TypeaheadConfig,
}

/// Which form fields the behaviors attach to, by element id.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormConfig {
    #[serde(default = "default_title_field")]
    pub title_field: String,
    #[serde(default = "default_alias_field")]
    pub alias_field: String,
    #[serde(default = "default_body_field")]
    pub body_field: String,
    /// Recompute the alias on every key-up in the title field.
    #[serde(default = "default_true")]
    pub slug_on_keyup: bool,
    /// Focus the body field at ready time when it already holds text.
    #[serde(default = "default_true")]
    pub focus_body: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title_field: default_title_field(),
            alias_field: default_alias_field(),
            body_field: default_body_field(),
            slug_on_keyup: true,
            focus_body: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfirmConfig {
    #[serde(default = "default_confirm_class")]
    pub class: String,
    #[serde(default = "default_confirm_message")]
    pub message: String,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            class: default_confirm_class(),
            message: default_confirm_message(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypeaheadConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_wrapper_class")]
    pub wrapper_class: String,
    #[serde(default = "default_image_field")]
    pub image_field: String,
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            wrapper_class: default_wrapper_class(),
            image_field: default_image_field(),
        }
    }
}

fn default_title_field() -> String {
    "title".to_string()
}

fn default_alias_field() -> String {
    "alias".to_string()
}

fn default_body_field() -> String {
    "body".to_string()
}

fn default_confirm_class() -> String {
    "confirm".to_string()
}

fn default_confirm_message() -> String {
    "Are you sure?".to_string()
}

fn default_wrapper_class() -> String {
    "twitter-typeahead".to_string()
}

fn default_image_field() -> String {
    "image".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Could not read config file '{}': {}", path.display(), e)
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.form.title_field.is_empty() {
            anyhow::bail!("form.title_field must not be empty");
        }
        if self.form.alias_field.is_empty() {
            anyhow::bail!("form.alias_field must not be empty");
        }
        if self.form.title_field == self.form.alias_field {
            anyhow::bail!("form.title_field and form.alias_field must differ");
        }
        if self.form.body_field.is_empty() {
            anyhow::bail!("form.body_field must not be empty");
        }
        if self.confirm.class.is_empty() {
            anyhow::bail!("confirm.class must not be empty");
        }
        if self.confirm.message.is_empty() {
            anyhow::bail!("confirm.message must not be empty");
        }
        if self.typeahead.enabled
            && (self.typeahead.wrapper_class.is_empty() || self.typeahead.image_field.is_empty())
        {
            anyhow::bail!("typeahead.wrapper_class and typeahead.image_field must not be empty");
        }
        Ok(())
    }
}
