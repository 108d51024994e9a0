/// Main file
mod app_log;
mod args;
mod augment;
mod constants;
mod context;
mod create;
mod errors;
mod generator;
mod interactive;
mod options;
mod package_manifest;
mod process;
mod progressbar;
mod settings;
mod templates;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use std::env;

use app_log::log_env_init;
use args::*;
use context::CommandContext;
use interactive::TermPrompter;
use process::SystemRunner;
use settings::Settings;

fn main() -> Result<()> {
    log_env_init();
    match resolve_args() {
        Cli::Create(args) => {
            let settings = Settings::load(args.config.as_deref())?;
            let cwd = env::current_dir().context("no current directory")?;
            let mut prompter = TermPrompter::default();
            let mut runner = SystemRunner;
            let mut ctx = CommandContext {
                prompter: &mut prompter,
                runner: &mut runner,
                settings: &settings,
                cwd,
                verbose: args.verbose,
            };
            match create::run(&args, &mut ctx)? {
                create::Outcome::Created(dir) => log::debug!("created {}", dir.display()),
                create::Outcome::Cancelled => {}
            }
        }
    }
    Ok(())
}
