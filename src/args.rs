use std::fmt;
use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const PROJECT_SETUP: &str = "Project Setup";
    pub const EXTRAS: &str = "Extras";
    pub const RUN_PARAMETERS: &str = "Run Parameters";
}

#[derive(Parser)]
#[command(
    name = "react",
    bin_name = "react",
    arg_required_else_help(true),
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub enum Cli {
    /// Create a new React application
    #[command(
        after_help = "Examples:\n  react create my-app\n  react create my-app --bundler webpack --pkg yarn --prettier --ts --rps --routing\n  react create my-app --bundler snowpack"
    )]
    Create(CreateArgs),
}

/// Front-end build tool family of the generated app
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Bundler {
    Webpack,
    Snowpack,
}

impl Bundler {
    pub const ALL: [Bundler; 2] = [Bundler::Webpack, Bundler::Snowpack];

    pub const fn label(self) -> &'static str {
        match self {
            Bundler::Webpack => "Webpack",
            Bundler::Snowpack => "Snowpack",
        }
    }
}

impl fmt::Display for Bundler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PackageManager {
    Yarn,
    Npm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 2] = [PackageManager::Yarn, PackageManager::Npm];

    pub const fn label(self) -> &'static str {
        match self {
            PackageManager::Yarn => "Yarn",
            PackageManager::Npm => "NPM",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which prettier rules end up in `package.json`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PrettierConfig {
    /// Write the recommended rule set
    Recommended,
    /// Keep prettier's own defaults
    Defaults,
}

impl PrettierConfig {
    pub const ALL: [PrettierConfig; 2] = [PrettierConfig::Recommended, PrettierConfig::Defaults];

    pub const fn label(self) -> &'static str {
        match self {
            PrettierConfig::Recommended => "Recommended rules",
            PrettierConfig::Defaults => "Prettier defaults",
        }
    }
}

#[derive(Clone, Debug, Default, Args)]
#[command(arg_required_else_help(false))]
pub struct CreateArgs {
    /// Application name, only letters, numbers and dashes
    #[arg()]
    pub name: Option<String>,

    /// Application bundler
    #[arg(long, short, value_enum, ignore_case = true, help_heading = heading::PROJECT_SETUP)]
    pub bundler: Option<Bundler>,

    /// Package manager to use
    #[arg(long, short, value_enum, ignore_case = true, help_heading = heading::PROJECT_SETUP)]
    pub pkg: Option<PackageManager>,

    /// Use TypeScript
    #[arg(long, short = 't', overrides_with = "no_ts", help_heading = heading::PROJECT_SETUP)]
    pub ts: bool,

    /// Use plain JavaScript
    #[arg(long, overrides_with = "ts", help_heading = heading::PROJECT_SETUP)]
    pub no_ts: bool,

    /// Use prettier code formatter
    #[arg(long, overrides_with = "no_prettier", help_heading = heading::EXTRAS)]
    pub prettier: bool,

    /// Do not set up prettier
    #[arg(long, overrides_with = "prettier", help_heading = heading::EXTRAS)]
    pub no_prettier: bool,

    /// Prettier rules to write into package.json
    #[arg(long, value_enum, requires = "prettier", help_heading = heading::EXTRAS)]
    pub prettier_config: Option<PrettierConfig>,

    /// Use recommended project structure
    #[arg(long, short = 's', overrides_with = "no_rps", help_heading = heading::EXTRAS)]
    pub rps: bool,

    /// Keep the generator's project structure
    #[arg(long, overrides_with = "rps", help_heading = heading::EXTRAS)]
    pub no_rps: bool,

    /// Add routing feature
    #[arg(long, short, overrides_with = "no_routing", help_heading = heading::EXTRAS)]
    pub routing: bool,

    /// Do not add routing
    #[arg(long, overrides_with = "routing", help_heading = heading::EXTRAS)]
    pub no_routing: bool,

    /// Skip the confirmation prompt
    #[arg(long, short, action, help_heading = heading::RUN_PARAMETERS)]
    pub yes: bool,

    /// Tool settings file, defaults to `$HOME/.react-create.toml` when present
    #[arg(long, value_name = "FILE", help_heading = heading::RUN_PARAMETERS)]
    pub config: Option<PathBuf>,

    /// Enables more verbose output.
    #[arg(long, short, action)]
    pub verbose: bool,
}

/// `Some(true)` for `--flag`, `Some(false)` for `--no-flag`, `None` when neither was given
const fn tri_state(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl CreateArgs {
    pub const fn typescript(&self) -> Option<bool> {
        tri_state(self.ts, self.no_ts)
    }

    pub const fn prettier(&self) -> Option<bool> {
        tri_state(self.prettier, self.no_prettier)
    }

    pub const fn recommended_structure(&self) -> Option<bool> {
        tri_state(self.rps, self.no_rps)
    }

    pub const fn routing(&self) -> Option<bool> {
        tri_state(self.routing, self.no_routing)
    }

    /// `--yes` pre-answers the confirmation gate
    pub const fn confirmed(&self) -> Option<bool> {
        if self.yes {
            Some(true)
        } else {
            None
        }
    }
}

/// To get the arguments list from terminal
pub fn resolve_args() -> Cli {
    Cli::parse()
}
