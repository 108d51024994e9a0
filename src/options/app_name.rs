use anyhow::Result;
use regex::Regex;

use crate::context::CommandContext;
use crate::errors::{CreateError, INVALID_APP_NAME_ERROR};
use crate::interactive::Question;

pub const APP_NAME_PATTERN: &str = r"^[0-9a-zA-Z-]*$";

pub fn app_name_regex() -> Result<Regex> {
    Ok(Regex::new(APP_NAME_PATTERN)?)
}

pub fn validate_app_name(name: &str) -> Result<()> {
    if app_name_regex()?.is_match(name) {
        Ok(())
    } else {
        Err(CreateError::InvalidAppName.into())
    }
}

/// A name given on the command line is checked once and never re-asked,
/// a prompted one is re-asked until it is valid
pub fn get_app_name(name: Option<String>, ctx: &mut CommandContext<'_>) -> Result<String> {
    match name {
        Some(name) => {
            validate_app_name(&name)?;
            Ok(name)
        }
        None => {
            let question = Question::text(
                "name",
                "What is your application name?",
                app_name_regex()?,
                INVALID_APP_NAME_ERROR,
            );
            ctx.ask(&question)?.into_text()
        }
    }
}
