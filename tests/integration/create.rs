#![cfg(unix)]

use crate::helpers::prelude::*;

#[test]
fn it_creates_a_webpack_app_with_every_extra() {
    let tools = FakeTools::new();
    let dir = tempdir().build();

    binary()
        .create("my-app")
        .arg_bundler("webpack")
        .arg_pkg("npm")
        .args(["--ts", "--routing", "--prettier", "--rps", "--yes"])
        .arg_config(tools.config())
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Done").from_utf8());

    assert_eq!(
        tools.calls(),
        [
            "npx create-react-app my-app --template typescript --use-npm",
            "npm install react-router-dom",
            "npm install @types/react-router-dom -D",
            "npm install prettier eslint-config-prettier eslint-plugin-prettier -D",
        ]
    );

    let routes = dir.read("my-app/src/Routes.tsx");
    assert!(routes.contains("react-router-dom"));
    assert!(dir.exists("my-app/src/components/.gitkeep"));
    assert!(dir.exists("my-app/src/pages/.gitkeep"));

    let manifest = dir.read("my-app/package.json");
    let lint = r#""lint": "eslint '*/**/*.{js,ts,tsx}' --quiet --fix""#;
    assert!(manifest.contains(lint));
    let rules = "  \"prettier\": {\n    \"bracketSpacing\": true,";
    assert!(manifest.contains(rules));
    assert!(manifest.contains(r#""start": "react-scripts start""#));
    assert_eq!(manifest.matches("\"prettier\"").count(), 2);
}

#[test]
fn it_creates_a_plain_snowpack_app_with_yarn() {
    let tools = FakeTools::new();
    let dir = tempdir().build();

    binary()
        .create("snow-app")
        .args(["-b", "snowpack", "-p", "yarn", "--no-ts"])
        .args(["--no-routing", "--no-prettier", "--no-rps", "-y"])
        .arg_config(tools.config())
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(
        tools.calls(),
        [
            "npx create-snowpack-app snow-app --template @snowpack/app-template-react --use-yarn",
        ]
    );
    assert!(!dir.exists("snow-app/src/Routes.js"));
}

#[test]
fn it_adds_javascript_routing_with_yarn() {
    let tools = FakeTools::new();
    let dir = tempdir().build();

    binary()
        .create("routed")
        .args(["--bundler", "Webpack", "--pkg", "Yarn", "--no-ts"])
        .args(["--routing", "--no-prettier", "--no-rps", "--yes"])
        .arg_config(tools.config())
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(
        tools.calls(),
        ["npx create-react-app routed", "yarn add react-router-dom"]
    );
    assert!(dir.exists("routed/src/Routes.js"));
    assert!(!dir.exists("routed/src/Routes.tsx"));
}

#[test]
fn it_keeps_prettier_defaults_when_asked() {
    let tools = FakeTools::new();
    let dir = tempdir().build();

    binary()
        .create("my-app")
        .args(["-b", "webpack", "-p", "yarn", "--no-ts"])
        .args(["--no-routing", "--no-rps", "-y"])
        .args(["--prettier", "--prettier-config", "defaults"])
        .arg_config(tools.config())
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(
        tools.calls(),
        [
            "npx create-react-app my-app",
            "yarn add prettier eslint-config-prettier eslint-plugin-prettier --dev",
        ]
    );
    let manifest = dir.read("my-app/package.json");
    assert!(manifest.contains("\"lint\""));
    assert!(!manifest.contains("bracketSpacing"));
}

#[test]
fn it_logs_invocations_when_verbose() {
    let tools = FakeTools::new();
    let dir = tempdir().build();

    binary()
        .create("my-app")
        .args(["-b", "webpack", "-p", "npm", "--no-ts"])
        .args(["--no-routing", "--no-prettier", "--no-rps"])
        .args(["--yes", "--verbose"])
        .arg_config(tools.config())
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(output_contains("create-react-app my-app --use-npm"));
}
