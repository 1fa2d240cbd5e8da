use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::models::{ClickOutcome, Event, Page};
use crate::services::confirm::{ConfirmPrompt, StaticPrompt, TerminalPrompt};
use crate::{Binder, Config};

#[derive(Serialize)]
struct ClickReport {
    target: String,
    outcome: ClickOutcome,
}

#[derive(Serialize)]
struct ApplyReport {
    page: Page,
    clicks: Vec<ClickReport>,
}

pub fn run(
    config_path: &Path,
    page_path: &Path,
    events_path: Option<&Path>,
    assume_yes: bool,
) -> Result<()> {
    let config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        tracing::debug!("No config at {:?}, using defaults", config_path);
        Config::default()
    };

    let page_json = std::fs::read_to_string(page_path)
        .with_context(|| format!("Could not read page fixture '{}'", page_path.display()))?;
    let mut page: Page = serde_json::from_str(&page_json)
        .with_context(|| format!("Invalid page fixture '{}'", page_path.display()))?;

    let events: Vec<Event> = match events_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Could not read event script '{}'", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Invalid event script '{}'", path.display()))?
        }
        None => vec![Event::Ready],
    };

    let binder = Binder::new(config);
    binder.attach(&page)?;

    let mut prompt: Box<dyn ConfirmPrompt> = if assume_yes {
        Box::new(StaticPrompt(true))
    } else {
        Box::new(TerminalPrompt)
    };

    let mut clicks = Vec::new();
    for event in &events {
        let outcome = binder.dispatch(&mut page, event, prompt.as_mut());
        if let (Some(outcome), Event::Click { target }) = (outcome, event) {
            clicks.push(ClickReport {
                target: target.clone(),
                outcome,
            });
        }
    }

    let report = ApplyReport { page, clicks };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
