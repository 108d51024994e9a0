mod app_name;
mod project_dir;

use anyhow::Result;
use console::style;
use log::info;

use crate::args::{Bundler, CreateArgs, PackageManager, PrettierConfig};
use crate::context::CommandContext;
use crate::errors::CreateError;
use crate::interactive::{Answer, Question};

pub use app_name::get_app_name;
pub use project_dir::ProjectDir;

/// Every choice driving generation, fixed before the first subprocess runs
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub name: String,
    pub project_dir: ProjectDir,
    pub bundler: Bundler,
    pub package_manager: PackageManager,
    pub typescript: bool,
    pub routing: bool,
    /// `None` when prettier is not wanted
    pub prettier: Option<PrettierConfig>,
    pub recommended_structure: bool,
}

/// Use the flag value when there is one, otherwise ask `question` exactly once
pub fn resolve<T>(
    flag: Option<T>,
    ctx: &mut CommandContext<'_>,
    question: Question,
    convert: impl FnOnce(Answer) -> Result<T>,
) -> Result<T> {
    match flag {
        Some(value) => Ok(value),
        None => convert(ctx.ask(&question)?),
    }
}

fn confirm_question(var_name: &str, prompt: &str) -> Question {
    Question::confirm(var_name, prompt, true)
}

fn labels<T: Copy>(all: &[T], label: impl Fn(T) -> &'static str) -> Vec<&'static str> {
    all.iter().copied().map(label).collect()
}

fn pick<T: Copy>(all: &[T], answer: Answer) -> Result<T> {
    let index = answer.into_choice()?;
    all.get(index)
        .copied()
        .ok_or_else(|| anyhow::anyhow!("choice {index} is out of range"))
}

/// Resolve the whole run configuration. Prompt order: name, bundler, TypeScript,
/// package manager, routing, prettier (+ its rule set), project structure.
pub fn collect(args: &CreateArgs, ctx: &mut CommandContext<'_>) -> Result<RunConfig> {
    let name = get_app_name(args.name.clone(), ctx)?;

    let bundler = resolve(
        args.bundler,
        ctx,
        Question::choice(
            "bundler",
            "Choose a web bundler",
            &labels(&Bundler::ALL, Bundler::label),
            0,
        ),
        |answer| pick(&Bundler::ALL, answer),
    )?;

    let typescript = resolve(
        args.typescript(),
        ctx,
        confirm_question("ts", "Do you want to use TypeScript?"),
        Answer::into_bool,
    )?;

    let package_manager = resolve(
        args.pkg,
        ctx,
        Question::choice(
            "pkg",
            "Choose a package manager",
            &labels(&PackageManager::ALL, PackageManager::label),
            0,
        ),
        |answer| pick(&PackageManager::ALL, answer),
    )?;

    let routing = resolve(
        args.routing(),
        ctx,
        confirm_question("routing", "Do you want to add routing feature?"),
        Answer::into_bool,
    )?;

    let use_prettier = resolve(
        args.prettier(),
        ctx,
        confirm_question("prettier", "Do you want to use Prettier?"),
        Answer::into_bool,
    )?;
    // a flagged `--prettier` without a rule set means the recommended rules
    let rules_flag = args
        .prettier_config
        .or(args.prettier().map(|_| PrettierConfig::Recommended));
    let prettier = if use_prettier {
        Some(resolve(
            rules_flag,
            ctx,
            Question::choice(
                "prettier_config",
                "Which Prettier rules?",
                &labels(&PrettierConfig::ALL, PrettierConfig::label),
                0,
            ),
            |answer| pick(&PrettierConfig::ALL, answer),
        )?)
    } else {
        None
    };

    let recommended_structure = resolve(
        args.recommended_structure(),
        ctx,
        confirm_question("rps", "Do you want to use recommended project structure?"),
        Answer::into_bool,
    )?;

    let config = RunConfig {
        project_dir: ProjectDir::new(&ctx.cwd, &name),
        name,
        bundler,
        package_manager,
        typescript,
        routing,
        prettier,
        recommended_structure,
    };
    config.check_supported()?;
    Ok(config)
}

impl RunConfig {
    /// Combinations that cannot be generated yet
    pub fn check_supported(&self) -> Result<(), CreateError> {
        if self.bundler == Bundler::Snowpack && self.prettier.is_some() {
            return Err(CreateError::NotImplemented(
                "Prettier setup for Snowpack apps".into(),
            ));
        }
        Ok(())
    }

    pub fn show_summary(&self) {
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        let destination = format!("Destination: {} ...", self.project_dir);
        info!("🔧 {}", style(destination).bold().yellow());
        let app_name = format!("app-name: {} ...", self.name);
        info!("🔧 {}", style(app_name).bold().yellow());

        let prettier = self.prettier.map_or("no", PrettierConfig::label);
        for (label, value) in [
            ("bundler", self.bundler.label()),
            ("package manager", self.package_manager.label()),
            ("typescript", yes_no(self.typescript)),
            ("routing", yes_no(self.routing)),
            ("prettier", prettier),
            ("project structure", yes_no(self.recommended_structure)),
        ] {
            info!("   {:<19}{}", format!("{label}:"), style(value).cyan());
        }
    }
}
