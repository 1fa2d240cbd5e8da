use anyhow::Result;
use std::io::{self, BufRead};

use crate::services::slug::slugify;

pub fn run(titles: Vec<String>) -> Result<()> {
    if titles.is_empty() {
        for line in io::stdin().lock().lines() {
            println!("{}", slugify(&line?));
        }
        return Ok(());
    }

    for title in titles {
        println!("{}", slugify(&title));
    }
    Ok(())
}
