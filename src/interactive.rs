use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use console::style;
use log::info;

/// Result of classifying one line of prompt input. Reserved commands are
/// recognized on the lower-cased line before any sanitization happens.
#[derive(Debug, PartialEq)]
pub enum Reply {
    Help,
    Quit,
    Value(String),
}

const HELP_TOPICS: &[(&str, &str)] = &[
    (
        "name",
        "This will be the name of the main folder in your project's \"src\" directory.\n\
         Only alphanumeric characters and \"_\" are kept; every other character is\n\
         replaced with \"_\", and the result is lower-cased.\n\n\
         The project folder itself uses the title-cased form, so entering\n\
         \"my cool app\" creates a folder \"My Cool App\" with a package \"my_cool_app\".",
    ),
    (
        "directory",
        "The directory your new project folder is placed in. It is created if it\n\
         does not exist yet.\n\n\
         Allowed characters are alphanumerics, \"_\", \".\", \"-\", spaces and the\n\
         path separator; everything else is replaced with \"_\".",
    ),
    (
        "author",
        "The author written into the LICENSE file and the packaging metadata.\n\
         Leave this blank to use your OS login name.",
    ),
];

pub fn classify(line: &str) -> Reply {
    match line.to_lowercase().as_str() {
        "?help" => Reply::Help,
        "?quit" => Reply::Quit,
        _ => Reply::Value(line.to_string()),
    }
}

pub fn print_welcome() {
    println!(
        "+-------------------------------+\n\
         |Welcome to the Project Creator.|\n\
         +-------------------------------+\n\
         \n\
         To get help about the current step, type \"?help\".\n\
         To quit without creating a project, type \"?quit\"."
    );
}

/// Help text for a prompt topic. Every interactive prompt has an entry.
pub fn help_text(topic: &str) -> Option<&'static str> {
    HELP_TOPICS
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, text)| *text)
}

fn print_help(topic: &str) {
    let header = format!("HELP ({}):", topic.to_uppercase());
    println!("\n{}", style(&header).bold());
    println!("{}\n", "=".repeat(header.len()));
    println!("{}\n", help_text(topic).unwrap_or_default());
}

fn quit() -> ! {
    info!("👋 {}", style("No project created, goodbye!").bold());
    std::process::exit(0)
}

fn read_reply(input: &mut impl BufRead, prompt: &str) -> Result<Reply> {
    print!("{} ", style(prompt).bold());
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("unexpected end of input while waiting for: {prompt}");
    }
    Ok(classify(line.trim_end_matches(['\r', '\n'])))
}

/// Prompt for the project name until a value is accepted. The returned
/// string is raw user input; sanitization happens in the caller.
pub fn project_name(input: &mut impl BufRead) -> Result<String> {
    loop {
        match read_reply(input, "Enter your project's name:")? {
            Reply::Help => print_help("name"),
            Reply::Quit => quit(),
            Reply::Value(raw) => return Ok(raw),
        }
    }
}

/// Prompt for the parent directory the project folder is created in.
pub fn parent_directory(input: &mut impl BufRead) -> Result<String> {
    loop {
        match read_reply(input, "Enter your project's home directory:")? {
            Reply::Help => print_help("directory"),
            Reply::Quit => quit(),
            Reply::Value(raw) => return Ok(raw),
        }
    }
}

/// Prompt for the author. A blank answer means "use the OS login identity"
/// and is returned as `None`.
pub fn author(input: &mut impl BufRead) -> Result<Option<String>> {
    loop {
        match read_reply(input, "Enter the author (blank for your login name):")? {
            Reply::Help => print_help("author"),
            Reply::Quit => quit(),
            Reply::Value(raw) => {
                if raw.trim().is_empty() {
                    return Ok(None);
                }
                return Ok(Some(raw));
            }
        }
    }
}

/// Ask whether an existing project directory may be overwritten. Only an
/// explicit `y`/`yes` (case-insensitive) counts as affirmative; anything
/// else, a blank line or end of input is a refusal.
pub fn confirm_overwrite(input: &mut impl BufRead, destination: &dyn Display) -> Result<bool> {
    print!(
        "{} {} ",
        style(format!("Target directory {destination} already exists."))
            .bold()
            .yellow(),
        style("Overwrite? [y/N]:").bold()
    );
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
