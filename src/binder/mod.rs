use thiserror::Error;

use crate::config::Config;
use crate::models::{ClickOutcome, Event, Page};
use crate::services::confirm::{self, ConfirmPrompt};
use crate::services::{focus, slug, typeahead};

#[derive(Debug, Error)]
pub enum BindError {
    #[error("page has no title field '#{0}' to watch")]
    MissingTitleField(String),
    #[error("page has no alias field '#{0}' to write into")]
    MissingAliasField(String),
}

/// Wires the configured behaviors to a page and routes events to them.
/// Handlers run to completion one at a time; nothing here blocks except the
/// confirm prompt, which is synchronous by contract.
pub struct Binder {
    config: Config,
}

impl Binder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check that the fields the slug behavior needs are present. Event
    /// dispatch itself degrades to silent no-ops; this is for callers that
    /// want to fail loudly up front instead.
    pub fn attach(&self, page: &Page) -> Result<(), BindError> {
        let form = &self.config.form;
        if page.find(&form.title_field).is_none() {
            return Err(BindError::MissingTitleField(form.title_field.clone()));
        }
        if page.find(&form.alias_field).is_none() {
            return Err(BindError::MissingAliasField(form.alias_field.clone()));
        }
        Ok(())
    }

    /// Route one event. Clicks resolve to an outcome; other events do not.
    pub fn dispatch(
        &self,
        page: &mut Page,
        event: &Event,
        prompt: &mut dyn ConfirmPrompt,
    ) -> Option<ClickOutcome> {
        match event {
            Event::Ready => {
                self.on_ready(page);
                None
            }
            Event::Keyup { target } => {
                self.on_keyup(page, target);
                None
            }
            Event::Click { target } => Some(self.on_click(page, target, prompt)),
        }
    }

    /// One-time ready handlers: focus-on-load and the typeahead style fix.
    pub fn on_ready(&self, page: &mut Page) {
        if self.config.form.focus_body {
            focus::focus_body(page, &self.config.form.body_field);
        }
        if self.config.typeahead.enabled {
            typeahead::fix_display(
                page,
                &self.config.typeahead.wrapper_class,
                &self.config.typeahead.image_field,
            );
        }
    }

    /// Key-up in the title field rewrites the alias field from scratch.
    /// Key-ups anywhere else are ignored.
    pub fn on_keyup(&self, page: &mut Page, target: &str) {
        let form = &self.config.form;
        if !form.slug_on_keyup || target != form.title_field {
            return;
        }
        let alias = match page.value_of(&form.title_field) {
            Some(title) => slug::slugify(title),
            None => return,
        };
        if page.set_value(&form.alias_field, &alias) {
            tracing::debug!("Alias updated to '{}'", alias);
        }
    }

    /// Clicks on confirm-marked elements wait on the prompt; everything else
    /// proceeds untouched.
    pub fn on_click(
        &self,
        page: &Page,
        target: &str,
        prompt: &mut dyn ConfirmPrompt,
    ) -> ClickOutcome {
        let gated = page
            .find(target)
            .map(|e| e.has_class(&self.config.confirm.class))
            .unwrap_or(false);
        if !gated {
            return ClickOutcome::Proceed;
        }
        let outcome = confirm::gate_click(prompt, &self.config.confirm.message);
        tracing::debug!("Confirm gate on #{}: {}", target, outcome);
        outcome
    }
}
