//! Hands the run over to the bundler's own project generator

use anyhow::Result;
use log::warn;

use crate::args::{Bundler, PackageManager};
use crate::constants::*;
use crate::context::CommandContext;
use crate::options::RunConfig;
use crate::process::{Invocation, ProcessHandler};
use crate::progressbar;
use crate::settings::Tools;

/// The single generator call for `config`, launched through the package runner
pub fn generator_invocation(config: &RunConfig, tools: &Tools) -> Invocation {
    let invocation = Invocation::new(&tools.runner);
    let target = target_arg(&config.name);
    match config.bundler {
        Bundler::Webpack => {
            let mut invocation = invocation.args([CREATE_REACT_APP, target.as_str()]);
            if config.typescript {
                invocation = invocation.args(["--template", "typescript"]);
            }
            // yarn is create-react-app's own default
            if config.package_manager == PackageManager::Npm {
                invocation = invocation.arg("--use-npm");
            }
            invocation
        }
        Bundler::Snowpack => {
            let template = if config.typescript {
                SNOWPACK_REACT_TS_TEMPLATE
            } else {
                SNOWPACK_REACT_TEMPLATE
            };
            let mut invocation = invocation.args([
                CREATE_SNOWPACK_APP,
                target.as_str(),
                "--template",
                template,
            ]);
            if config.package_manager == PackageManager::Yarn {
                invocation = invocation.arg("--use-yarn");
            }
            invocation
        }
    }
}

/// The project argument; a leading dash would be parsed as a flag, so such
/// names are passed as a relative path
fn target_arg(name: &str) -> String {
    if name.starts_with('-') {
        format!("./{name}")
    } else {
        name.to_string()
    }
}

/// Run the generator in the invoking directory, blocking until it exits.
/// Its stderr is reported as warnings while it runs.
pub fn create_app(config: &RunConfig, ctx: &mut CommandContext<'_>) -> Result<()> {
    let invocation = generator_invocation(config, &ctx.settings.tools);
    let pb = progressbar::spinner("Creating app");
    let (data_pb, error_pb) = (pb.clone(), pb.clone());
    let handler = ProcessHandler::default()
        .on_data(move |line| data_pb.set_message(line.to_string()))
        .on_error(move |line| {
            if !line.trim().is_empty() {
                error_pb.suspend(|| warn!("{line}"));
            }
        });
    let result = ctx.stream(&invocation, handler);
    match result {
        Ok(_) => {
            progressbar::finish(&pb);
            Ok(())
        }
        Err(e) => {
            pb.abandon();
            Err(e)
        }
    }
}
