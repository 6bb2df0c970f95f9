use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use liquid::{Parser, ParserBuilder};
use liquid_core::{Object, Value};
use thiserror::Error;

use crate::template_variables::ProjectName;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("no template named `{0}`")]
    UnknownTemplate(String),
    #[error("template `{name}` references a placeholder with no value: {reason}")]
    MissingPlaceholder { name: String, reason: String },
}

const LICENSE: &str = r#"MIT License

Copyright (c) {{year}} "{{author}}"

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

const PYPROJECT_TOML: &str = r#"[build-system]
requires = ["setuptools>=61.0"]
build-backend = "setuptools.build_meta"
"#;

const README_MD: &str = r#"# New Project

This project skeleton was generated by Project Creator.

## Layout

- `src/` holds the package sources.
- `tests/` holds the test suite.

## Getting started

Install the package in editable mode:

    pip install -e .
"#;

const SETUP_CFG: &str = r#"[metadata]
name = {{proj_name}}
version = 0.1.0
author = {{author}}
description = Add a short description here
long_description = file: README.md
long_description_content_type = text/markdown
license_files = LICENSE

[options]
package_dir =
    = src
packages = find:
python_requires = >={{python_ver}}

[options.packages.find]
where = src
"#;

const SETUP_PY: &str = r#"from setuptools import setup

if __name__ == "__main__":
    setup()
"#;

const PACKAGE_INIT: &str = "";

const MAIN_PY: &str = r#"def main():
    pass


if __name__ == "__main__":
    main()
"#;

/// The skeleton files, keyed by file name. Fixed at compile time, never
/// mutated. `__init__.py` is rendered into both the package and the tests
/// directory.
const TEMPLATES: &[(&str, &str)] = &[
    ("LICENSE", LICENSE),
    ("pyproject.toml", PYPROJECT_TOML),
    ("README.md", README_MD),
    ("setup.cfg", SETUP_CFG),
    ("setup.py", SETUP_PY),
    ("__init__.py", PACKAGE_INIT),
    ("main.py", MAIN_PY),
];

pub fn lookup(name: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(template_name, _)| *template_name == name)
        .map(|(_, text)| *text)
}

pub fn create_liquid_engine() -> Parser {
    ParserBuilder::with_stdlib()
        .build()
        .expect("can't fail due to no partials support")
}

/// Build the substitution object once all prompts have resolved. It is
/// reused for every template render of the run.
pub fn create_substitutions(
    project_name: &ProjectName,
    author: &str,
    year: i32,
    python_ver: &str,
) -> Object {
    let mut substitutions = Object::new();
    substitutions.insert(
        "proj_name".into(),
        Value::Scalar(project_name.ident().to_owned().into()),
    );
    substitutions.insert("author".into(), Value::Scalar(author.to_owned().into()));
    substitutions.insert("year".into(), Value::Scalar(year.to_string().into()));
    substitutions.insert(
        "python_ver".into(),
        Value::Scalar(python_ver.to_owned().into()),
    );
    substitutions
}

/// Render one template and write it to `target_dir/<name>`, truncating any
/// existing file. A placeholder absent from `substitutions` surfaces as
/// [`TemplateError::MissingPlaceholder`]; with the map built by
/// [`create_substitutions`] that cannot happen.
pub fn render_and_write(
    engine: &Parser,
    name: &str,
    target_dir: &Path,
    substitutions: &Object,
) -> Result<()> {
    let raw = lookup(name).ok_or_else(|| TemplateError::UnknownTemplate(name.to_string()))?;
    let template = engine
        .parse(raw)
        .with_context(|| format!("template `{name}` is not valid"))?;
    let rendered = template
        .render(substitutions)
        .map_err(|e| TemplateError::MissingPlaceholder {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
    let target = target_dir.join(name);
    fs::write(&target, rendered).with_context(|| format!("cannot write {}", target.display()))?;
    Ok(())
}
