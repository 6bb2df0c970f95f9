use std::env;
use std::path::PathBuf;

use clap::Parser;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
            .error(ERROR)
    };
}

#[derive(Clone, Debug, Parser)]
#[command(
    name = "project-creator",
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub struct AppArgs {
    /// Project name; will be lower-cased and reduced to `[a-z0-9_]`.
    /// Prompted for interactively when omitted.
    #[arg(long, short, value_parser)]
    pub name: Option<String>,

    /// Parent directory the project folder is created in.
    /// Prompted for interactively when omitted.
    #[arg(long, short, value_parser, value_name = "PATH")]
    pub destination: Option<PathBuf>,

    /// Author recorded in the license and packaging metadata.
    /// Prompted for interactively when omitted; a blank answer falls back
    /// to the OS login name.
    #[arg(long, short, value_parser)]
    pub author: Option<String>,

    /// Minimum Python version written into the packaging metadata
    #[arg(long, value_name = "MAJOR.MINOR", default_value = "3.11")]
    pub python_version: String,

    /// Overwrite an existing project directory without being prompted
    #[arg(short, long, action)]
    pub overwrite: bool,

    /// Enables more verbose output.
    #[arg(long, short, action)]
    pub verbose: bool,
}

impl Default for AppArgs {
    fn default() -> Self {
        Self {
            name: None,
            destination: None,
            author: None,
            python_version: "3.11".to_string(),
            overwrite: false,
            verbose: false,
        }
    }
}

/// To get the arguments list from terminal
/// Return : work arguments
pub fn resolve_args() -> AppArgs {
    AppArgs::parse_from(env::args())
}
