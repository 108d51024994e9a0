use std::path::PathBuf;

use anyhow::Result;
use console::Term;
use log::{debug, info};

use crate::interactive::{Answer, Prompter, Question};
use crate::process::{CommandRunner, Invocation, ProcessHandler, ProcessOutput};
use crate::settings::Settings;

/// Everything a command needs from its surroundings
pub struct CommandContext<'a> {
    pub prompter: &'a mut dyn Prompter,
    pub runner: &'a mut dyn CommandRunner,
    pub settings: &'a Settings,
    /// The invoking directory, projects are created below it
    pub cwd: PathBuf,
    pub verbose: bool,
}

impl CommandContext<'_> {
    pub fn ask(&mut self, question: &Question) -> Result<Answer> {
        self.prompter.ask(question)
    }

    /// Blocking run, a non-zero exit becomes an error carrying stderr
    pub fn run(&mut self, invocation: &Invocation) -> Result<ProcessOutput> {
        self.trace(invocation);
        let output = self.runner.run(invocation)?;
        Ok(output.ensure_success(&invocation.program)?)
    }

    /// Like [`Self::run`], with output lines handed to `handler` as they arrive
    pub fn stream(
        &mut self,
        invocation: &Invocation,
        handler: ProcessHandler<'_>,
    ) -> Result<ProcessOutput> {
        self.trace(invocation);
        let output = self.runner.stream(invocation, handler)?;
        Ok(output.ensure_success(&invocation.program)?)
    }

    fn trace(&self, invocation: &Invocation) {
        if self.verbose {
            info!("$ {invocation}");
        }
    }

    /// Wipe the terminal, no-op when stdout is not a terminal
    pub fn clear_stdout(&self) {
        let term = Term::stdout();
        if term.is_term() {
            if let Err(e) = term.clear_screen() {
                debug!("cannot clear the terminal: {e}");
            }
        }
    }
}
