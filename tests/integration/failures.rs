#![cfg(unix)]

use crate::helpers::prelude::*;

const GENERATOR_ERROR: &str = "npm ERR! could not determine executable to run";

#[test]
fn it_reports_generator_stderr_and_stops() {
    let tools = FakeTools::failing("npx", GENERATOR_ERROR);
    let dir = tempdir().build();

    binary()
        .create("my-app")
        .args(["-b", "webpack", "-p", "npm"])
        .args(["--ts", "--routing", "--prettier", "--rps", "-y"])
        .arg_config(tools.config())
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(output_contains(GENERATOR_ERROR));

    assert_eq!(
        tools.calls(),
        [
            "npx create-react-app my-app --template typescript --use-npm",
        ]
    );
}

#[test]
fn it_reports_install_stderr_and_skips_later_steps() {
    let tools = FakeTools::failing("yarn", "error Couldn't find package");
    let dir = tempdir().build();

    binary()
        .create("my-app")
        .args(["-b", "webpack", "-p", "yarn", "--no-ts"])
        .args(["--routing", "--prettier", "--rps", "-y"])
        .arg_config(tools.config())
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(output_contains("error Couldn't find package"));

    assert_eq!(
        tools.calls(),
        ["npx create-react-app my-app", "yarn add react-router-dom"]
    );
    // the generated project is left in place
    assert!(dir.exists("my-app/package.json"));
    assert!(!dir.read("my-app/package.json").contains("\"lint\""));
    assert!(!dir.exists("my-app/src/components"));
}

#[test]
fn it_refuses_prettier_for_snowpack() {
    let tools = FakeTools::new();
    let dir = tempdir().build();

    binary()
        .create("my-app")
        .args(["-b", "snowpack", "-p", "yarn", "--ts"])
        .args(["--no-routing", "--prettier", "--no-rps", "-y"])
        .arg_config(tools.config())
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("not implemented").from_utf8());

    assert!(tools.calls().is_empty());
}

#[test]
fn it_refuses_an_existing_directory() {
    let tools = FakeTools::new();
    let dir = tempdir().file("my-app/keep.txt", "mine").build();

    binary()
        .create("my-app")
        .args(["-b", "webpack", "-p", "npm", "--no-ts"])
        .args(["--no-routing", "--no-prettier", "--no-rps", "-y"])
        .arg_config(tools.config())
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("already exists").from_utf8());

    assert!(tools.calls().is_empty());
    assert_eq!(dir.read("my-app/keep.txt"), "mine");
}

#[test]
fn it_fails_on_a_missing_settings_file() {
    let dir = tempdir().build();

    binary()
        .create("my-app")
        .arg_config(dir.join("nope.toml"))
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(output_contains("Cannot find the settings file"));
}
