use anyhow::Result;

use crate::services::slug::{validate_alias, MAX_ALIAS_LENGTH};

pub fn run(alias: &str) -> Result<()> {
    if !validate_alias(alias) {
        anyhow::bail!(
            "'{}' is not a valid alias: 1-{} characters from a-z, а-я, 0-9 and '-'",
            alias,
            MAX_ALIAS_LENGTH
        );
    }
    println!("ok");
    Ok(())
}
