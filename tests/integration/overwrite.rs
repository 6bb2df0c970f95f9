use crate::helpers::prelude::*;
use indoc::indoc;

#[test]
fn it_aborts_with_exit_code_1_when_overwrite_is_declined() {
    let dir = tempdir().file("My Cool App/notes.txt", "keep me");

    binary()
        .arg("--name")
        .arg("my cool app")
        .arg("--destination")
        .arg(dir.path())
        .arg("--author")
        .arg("Ada")
        .write_stdin("n\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("aborting").from_utf8());

    assert!(!dir.exists("My Cool App/LICENSE"));
    assert!(!dir.exists("My Cool App/setup.cfg"));
    assert_eq!(dir.read("My Cool App/notes.txt"), "keep me");
}

#[test]
fn a_blank_answer_counts_as_a_refusal() {
    let dir = tempdir().file("Foo/marker.txt", "untouched");

    binary()
        .arg("--name")
        .arg("foo")
        .arg("--destination")
        .arg(dir.path())
        .arg("--author")
        .arg("Ada")
        .write_stdin("\n")
        .assert()
        .failure()
        .code(1);

    assert!(!dir.exists("Foo/LICENSE"));
}

#[test]
fn it_overwrites_in_place_when_confirmed() {
    let dir = tempdir()
        .file("My Cool App/notes.txt", "keep me")
        .file(
            "My Cool App/setup.cfg",
            indoc! {r#"
                [metadata]
                name = stale
            "#},
        );

    binary()
        .arg("--name")
        .arg("my cool app")
        .arg("--destination")
        .arg(dir.path())
        .arg("--author")
        .arg("Ada")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Done!").from_utf8());

    for file in [
        "My Cool App/LICENSE",
        "My Cool App/pyproject.toml",
        "My Cool App/README.md",
        "My Cool App/setup.cfg",
        "My Cool App/setup.py",
        "My Cool App/src/my_cool_app/__init__.py",
        "My Cool App/src/my_cool_app/main.py",
        "My Cool App/tests/__init__.py",
    ] {
        assert!(dir.exists(file), "missing {file}");
    }

    let setup_cfg = dir.read("My Cool App/setup.cfg");
    assert!(setup_cfg.contains("name = my_cool_app"));
    assert!(!setup_cfg.contains("stale"));
    // files the tool does not own are left alone
    assert_eq!(dir.read("My Cool App/notes.txt"), "keep me");
}

#[test]
fn the_overwrite_flag_skips_the_confirmation() {
    let dir = tempdir().file("Foo/marker.txt", "untouched");

    binary()
        .arg("--name")
        .arg("foo")
        .arg("--destination")
        .arg(dir.path())
        .arg("--author")
        .arg("Ada")
        .arg("--overwrite")
        .assert()
        .success()
        .stdout(predicates::str::contains("Done!").from_utf8());

    assert!(dir.exists("Foo/LICENSE"));
    assert_eq!(dir.read("Foo/marker.txt"), "untouched");
}
