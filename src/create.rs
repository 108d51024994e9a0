use anyhow::Result;
use console::style;
use log::info;
use std::path::PathBuf;

use crate::args::CreateArgs;
use crate::augment::augment;
use crate::context::CommandContext;
use crate::generator::create_app;
use crate::interactive::{Answer, Question};
use crate::options::{self, resolve, RunConfig};

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Created(PathBuf),
    Cancelled,
}

/// `react create`: collect options, confirm, generate, augment
pub fn run(args: &CreateArgs, ctx: &mut CommandContext<'_>) -> Result<Outcome> {
    ctx.clear_stdout();

    let config = options::collect(args, ctx)?;
    config.project_dir.ensure_absent()?;
    config.show_summary();

    if !confirm(args, &config, ctx)? {
        info!("App creation cancelled");
        return Ok(Outcome::Cancelled);
    }

    create_app(&config, ctx)?;
    augment(&config, ctx)?;

    info!(
        "✨ {} {} {}",
        style("Done!").bold().green(),
        style("New app created").bold(),
        style(&config.project_dir).underlined()
    );
    Ok(Outcome::Created(config.project_dir.as_ref().to_path_buf()))
}

fn confirm(args: &CreateArgs, config: &RunConfig, ctx: &mut CommandContext<'_>) -> Result<bool> {
    let question = Question::confirm(
        "confirm",
        &format!(
            "You are about to create a new React app named \"{}\" with {}. Proceed?",
            config.name, config.bundler
        ),
        true,
    );
    resolve(args.confirmed(), ctx, question, Answer::into_bool)
}
