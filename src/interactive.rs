use anyhow::{anyhow, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use regex::Regex;

/// One interactive question
#[derive(Debug)]
pub struct Question {
    pub(crate) var_name: String,
    pub(crate) prompt: String,
    pub(crate) kind: QuestionKind,
}

/// Information needed to prompt for a typed value
#[derive(Debug)]
pub enum QuestionKind {
    /// Free text, re-asked until `regex` matches; `error` is shown on mismatch
    Text { regex: Regex, error: String },
    Choice {
        choices: Vec<String>,
        default: usize,
    },
    Confirm { default: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Choice(usize),
    Confirm(bool),
}

impl Question {
    pub fn text(var_name: &str, prompt: &str, regex: Regex, error: &str) -> Self {
        Self {
            var_name: var_name.into(),
            prompt: prompt.into(),
            kind: QuestionKind::Text {
                regex,
                error: error.into(),
            },
        }
    }

    pub fn choice(var_name: &str, prompt: &str, choices: &[&str], default: usize) -> Self {
        Self {
            var_name: var_name.into(),
            prompt: prompt.into(),
            kind: QuestionKind::Choice {
                choices: choices.iter().map(|c| c.to_string()).collect(),
                default,
            },
        }
    }

    pub fn confirm(var_name: &str, prompt: &str, default: bool) -> Self {
        Self {
            var_name: var_name.into(),
            prompt: prompt.into(),
            kind: QuestionKind::Confirm { default },
        }
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }
}

impl Answer {
    pub fn into_text(self) -> Result<String> {
        match self {
            Answer::Text(text) => Ok(text),
            other => Err(anyhow!("expected a text answer, got {other:?}")),
        }
    }

    pub fn into_choice(self) -> Result<usize> {
        match self {
            Answer::Choice(index) => Ok(index),
            other => Err(anyhow!("expected a choice answer, got {other:?}")),
        }
    }

    pub fn into_bool(self) -> Result<bool> {
        match self {
            Answer::Confirm(yes) => Ok(yes),
            other => Err(anyhow!("expected a yes/no answer, got {other:?}")),
        }
    }
}

/// Asks the user things
pub trait Prompter {
    fn ask(&mut self, question: &Question) -> Result<Answer>;
}

/// Prompts on the terminal with dialoguer
#[derive(Default)]
pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TermPrompter {
    fn ask(&mut self, question: &Question) -> Result<Answer> {
        match &question.kind {
            QuestionKind::Text { regex, error } => {
                handle_text_input(&self.theme, &question.prompt, regex, error)
                    .map(Answer::Text)
            }
            QuestionKind::Choice { choices, default } => {
                handle_choice_input(&self.theme, &question.prompt, choices, *default)
                    .map(Answer::Choice)
            }
            QuestionKind::Confirm { default } => {
                handle_confirm_input(&self.theme, &question.prompt, *default)
                    .map(Answer::Confirm)
            }
        }
    }
}

fn handle_text_input(
    theme: &ColorfulTheme,
    prompt: &str,
    regex: &Regex,
    error: &str,
) -> Result<String> {
    let input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), String> {
            if regex.is_match(input) {
                Ok(())
            } else {
                Err(style(error).bold().red().to_string())
            }
        })
        .interact_text()?;
    Ok(input)
}

fn handle_choice_input(
    theme: &ColorfulTheme,
    prompt: &str,
    choices: &[String],
    default: usize,
) -> Result<usize> {
    if default >= choices.len() {
        return Err(anyhow!("Default index out of bounds"));
    }
    let chosen = Select::with_theme(theme)
        .items(choices)
        .with_prompt(prompt)
        .default(default)
        .interact()?;

    Ok(chosen)
}

fn handle_confirm_input(theme: &ColorfulTheme, prompt: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    Ok(confirmed)
}
