/// Main file
mod app_log;
mod args;
mod interactive;
mod sanitize;
mod template;
mod template_variables;

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Utc};
use console::style;
use log::{info, warn};

use args::{resolve_args, AppArgs};
use sanitize::{sanitize, PATH_EXTRA};
use template::{create_liquid_engine, create_substitutions, render_and_write};
use template_variables::{get_authors, ProjectDir, ProjectName};

/// Files rendered into the project directory itself, in emission order.
const ROOT_FILES: &[&str] = &["LICENSE", "pyproject.toml", "README.md", "setup.cfg", "setup.py"];

fn main() -> Result<()> {
    app_log::init();
    let args = resolve_args();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let project_dir = generate(args, &mut input)?;
    info!(
        "✨ {} {} {}",
        style("Done!").bold().green(),
        style("New project created").bold(),
        style(&project_dir.display()).underlined()
    );
    Ok(())
}

/// To generate a Python project skeleton from the static templates
fn generate(args: AppArgs, input: &mut impl BufRead) -> Result<PathBuf> {
    if args.name.is_none() || args.destination.is_none() || args.author.is_none() {
        interactive::print_welcome();
    }

    // No file is written until all three inputs have resolved.
    let project_name = match &args.name {
        Some(name) => ProjectName::from_raw(name),
        None => ProjectName::from_raw(&interactive::project_name(input)?),
    };
    let parent_dir = match &args.destination {
        Some(path) => path.clone(),
        None => PathBuf::from(sanitize(&interactive::parent_directory(input)?, PATH_EXTRA)),
    };
    let author = match &args.author {
        Some(author) => author.clone(),
        None => match interactive::author(input)? {
            Some(author) => author,
            None => get_authors()?.author,
        },
    };

    if args.verbose {
        info!(
            "🔧 {}",
            style(format!("project-name: {} ...", project_name.ident()))
                .bold()
                .yellow()
        );
        info!("🔧 {}", style(format!("author: {author} ...")).bold().yellow());
    }

    let destination = ProjectDir::new(&parent_dir, &project_name.folder_name());
    info!(
        "🔧 {}",
        style(format!("Destination: {destination} ..."))
            .bold()
            .yellow()
    );

    if !parent_dir.as_os_str().is_empty() {
        fs::create_dir_all(&parent_dir)
            .with_context(|| format!("cannot create parent directory {}", parent_dir.display()))?;
    }

    if destination.exists() {
        let proceed = args.overwrite || interactive::confirm_overwrite(input, &destination)?;
        if !proceed {
            bail!(
                "⛔ {}",
                style("Target directory already exists, aborting!")
                    .bold()
                    .red()
            );
        }
        warn!(
            "{}",
            style(format!("Overwriting existing directory in place: {destination}"))
                .bold()
                .yellow()
        );
    } else {
        destination.create()?;
    }

    let package_dir = destination.as_ref().join("src").join(project_name.ident());
    let tests_dir = destination.as_ref().join("tests");
    fs::create_dir_all(&package_dir)
        .with_context(|| format!("cannot create package directory {}", package_dir.display()))?;
    fs::create_dir_all(&tests_dir)
        .with_context(|| format!("cannot create tests directory {}", tests_dir.display()))?;

    let substitutions = create_substitutions(
        &project_name,
        &author,
        Utc::now().year(),
        &args.python_version,
    );

    info!(
        "🔧 {}",
        style("Generating project skeleton ...").bold().yellow()
    );

    let engine = create_liquid_engine();
    for name in ROOT_FILES {
        render_and_write(&engine, name, destination.as_ref(), &substitutions)?;
    }
    render_and_write(&engine, "__init__.py", &package_dir, &substitutions)?;
    render_and_write(&engine, "main.py", &package_dir, &substitutions)?;
    render_and_write(&engine, "__init__.py", &tests_dir, &substitutions)?;

    Ok(destination.as_ref().to_owned())
}
