//! In-process stand-ins for the terminal and the process table

use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::interactive::{Answer, Prompter, Question, QuestionKind};
use crate::process::{CommandRunner, Invocation, ProcessOutput};

/// Replays canned answers and remembers what was asked
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
    pub rejected: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &Question) -> Result<Answer> {
        self.asked.push(question.var_name().to_string());
        loop {
            let answer = self
                .answers
                .pop_front()
                .ok_or_else(|| anyhow!("no scripted answer for `{}`", question.var_name()))?;
            // mimic the terminal re-asking on invalid text
            let kind = &question.kind;
            if let (QuestionKind::Text { regex, .. }, Answer::Text(text)) = (kind, &answer) {
                if !regex.is_match(text) {
                    self.rejected.push(text.clone());
                    continue;
                }
            }
            return Ok(answer);
        }
    }
}

/// Records invocations; can fail selected ones and fake a generated project
#[derive(Default)]
pub struct RecordingRunner {
    pub invocations: Vec<Invocation>,
    failures: Vec<(String, String)>,
    generated: Option<(PathBuf, String)>,
}

impl RecordingRunner {
    /// Any invocation whose command line contains `needle` exits 1 with `stderr`
    pub fn fail_on(mut self, needle: &str, stderr: &str) -> Self {
        self.failures.push((needle.into(), stderr.into()));
        self
    }

    /// Generator invocations create `project_dir` holding `manifest` as `package.json`
    pub fn generating(mut self, project_dir: impl Into<PathBuf>, manifest: &str) -> Self {
        self.generated = Some((project_dir.into(), manifest.into()));
        self
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.invocations.iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ProcessOutput> {
        self.invocations.push(invocation.clone());
        let line = invocation.to_string();
        let failure = self.failures.iter().find(|(text, _)| line.contains(text));
        if let Some((_, stderr)) = failure {
            return Ok(ProcessOutput {
                code: Some(1),
                stdout: Vec::new(),
                stderr: stderr.as_bytes().to_vec(),
            });
        }
        let is_generator = invocation
            .args
            .first()
            .is_some_and(|arg| arg.starts_with("create-"));
        if let (true, Some((dir, manifest))) = (is_generator, &self.generated) {
            fs::create_dir_all(dir.join("src"))?;
            fs::write(dir.join("package.json"), manifest)?;
        }
        Ok(ProcessOutput {
            code: Some(0),
            ..Default::default()
        })
    }
}

pub const CRA_MANIFEST: &str = r#"{
  "name": "my-app",
  "version": "0.1.0",
  "private": true,
  "dependencies": {
    "react": "^17.0.1",
    "react-dom": "^17.0.1",
    "react-scripts": "4.0.1"
  },
  "scripts": {
    "start": "react-scripts start",
    "build": "react-scripts build",
    "test": "react-scripts test",
    "eject": "react-scripts eject"
  },
  "eslintConfig": {
    "extends": [
      "react-app",
      "react-app/jest"
    ]
  },
  "browserslist": {
    "production": [">0.2%", "not dead", "not op_mini all"],
    "development": ["last 1 chrome version"]
  }
}
"#;
