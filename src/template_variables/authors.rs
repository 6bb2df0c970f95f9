use std::env;

use anyhow::{Context, Result};

#[derive(Debug, PartialEq)]
pub struct Authors {
    pub author: String,
}

/// The current OS login identity, used when the author prompt is left
/// blank. Read from the environment so tests can substitute it.
pub fn get_authors() -> Result<Authors> {
    let author = env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .context("cannot determine the current user: neither USER nor USERNAME is set")?;
    Ok(Authors { author })
}
