use console::style;
use heck::ToTitleCase;
use log::warn;

use crate::sanitize::sanitize;

/// Stores the sanitized project identifier and provides convenience
/// methods for handling casing.
#[derive(Debug, PartialEq)]
pub struct ProjectName {
    ident: String,
}

impl ProjectName {
    /// Reduce raw user input to a `[a-z0-9_]` identifier: lower-case it and
    /// replace every other character with `_`.
    pub fn from_raw(raw: &str) -> Self {
        let ident = sanitize(raw, &[]).to_lowercase();
        if ident != raw {
            warn!(
                "{} `{}` {} `{}`{}",
                style("Renaming project called").bold(),
                style(raw).bold().yellow(),
                style("to").bold(),
                style(&ident).bold().green(),
                style("...").bold()
            );
        }
        Self { ident }
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Human-readable folder name: underscore segments title-cased and
    /// joined with spaces, `my_cool_app` becomes `My Cool App`.
    pub fn folder_name(&self) -> String {
        self.ident.to_title_case()
    }
}
