//! Optional steps applied to the freshly generated project

use anyhow::{Context, Result};
use std::fs;

use crate::args::{PackageManager, PrettierConfig};
use crate::constants::*;
use crate::context::CommandContext;
use crate::options::RunConfig;
use crate::package_manifest::PackageManifest;
use crate::process::Invocation;
use crate::progressbar;
use crate::settings::Tools;
use crate::templates::{routes_file_name, REACT_ROUTER_TEMPLATE};

/// `npm install <packages> [-D]` or `yarn add <packages> [--dev]`, run inside the project
pub fn install_invocation(
    config: &RunConfig,
    tools: &Tools,
    packages: &[&str],
    dev: bool,
) -> Invocation {
    let (install, dev_flag) = match config.package_manager {
        PackageManager::Npm => ("install", "-D"),
        PackageManager::Yarn => ("add", "--dev"),
    };
    let mut invocation = Invocation::new(tools.package_manager(config.package_manager))
        .arg(install)
        .args(packages.iter().copied())
        .current_dir(&config.project_dir);
    if dev {
        invocation = invocation.arg(dev_flag);
    }
    invocation
}

fn install(
    ctx: &mut CommandContext<'_>,
    config: &RunConfig,
    packages: &[&str],
    dev: bool,
) -> Result<()> {
    let invocation = install_invocation(config, &ctx.settings.tools, packages, dev);
    ctx.run(&invocation)?;
    Ok(())
}

/// Routing, then formatter, then project structure; each only when asked for.
/// The first failure stops the remaining steps.
pub fn augment(config: &RunConfig, ctx: &mut CommandContext<'_>) -> Result<()> {
    if config.routing {
        let pb = progressbar::spinner("Setting up routing");
        setup_routing(config, ctx)?;
        progressbar::finish(&pb);
    }
    if let Some(rules) = config.prettier {
        let pb = progressbar::spinner("Setting up Prettier");
        setup_prettier(config, rules, ctx)?;
        progressbar::finish(&pb);
    }
    if config.recommended_structure {
        let pb = progressbar::spinner("Creating project structure");
        create_recommended_structure(config)?;
        progressbar::finish(&pb);
    }
    Ok(())
}

pub fn setup_routing(config: &RunConfig, ctx: &mut CommandContext<'_>) -> Result<()> {
    install(ctx, config, &[REACT_ROUTER], false)?;
    if config.typescript {
        install(ctx, config, &[REACT_ROUTER_TYPES], true)?;
    }

    let src = config.project_dir.src();
    fs::create_dir_all(&src)?;
    let routes = src.join(routes_file_name(config.typescript));
    fs::write(&routes, REACT_ROUTER_TEMPLATE)
        .with_context(|| format!("cannot write {}", routes.display()))?;
    Ok(())
}

pub fn setup_prettier(
    config: &RunConfig,
    rules: PrettierConfig,
    ctx: &mut CommandContext<'_>,
) -> Result<()> {
    install(ctx, config, &PRETTIER_PACKAGES, true)?;

    let manifest_path = config.project_dir.manifest();
    let mut manifest = PackageManifest::from_path(&manifest_path)?;
    add_prettier_rules(&mut manifest, rules)?;
    manifest.write(&manifest_path)
}

pub fn add_prettier_rules(manifest: &mut PackageManifest, rules: PrettierConfig) -> Result<()> {
    manifest.add_eslint_extends(PRETTIER_ESLINT_EXTENDS)?;
    if rules == PrettierConfig::Recommended {
        manifest.set_prettier_rules(prettier_rules());
    }
    manifest.set_script("lint", LINT_SCRIPT)
}

/// Empty `src/<dir>/.gitkeep` for each recommended directory
pub fn create_recommended_structure(config: &RunConfig) -> Result<()> {
    let src = config.project_dir.src();
    for dir in RECOMMENDED_DIRS {
        let dir = src.join(dir);
        fs::create_dir_all(&dir)
            .with_context(|| format!("cannot create {}", dir.display()))?;
        let keep = dir.join(".gitkeep");
        if !keep.exists() {
            fs::write(&keep, "")?;
        }
    }
    Ok(())
}
