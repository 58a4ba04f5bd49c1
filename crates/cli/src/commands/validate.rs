use advisr_core::config::{AppConfig, LoadOptions};
use advisr_core::{validate, ValidationOutcome};

use super::CommandResult;

pub fn run(age: Option<&str>, amount: Option<&str>) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return CommandResult::failure("validate", "config", error.to_string(), 2),
    };

    match validate(age, amount, config.validation.coercion) {
        ValidationOutcome::Valid => {
            CommandResult::success("validate", "slot values pass validation")
        }
        ValidationOutcome::Invalid { slot, message } => CommandResult::failure(
            "validate",
            "validation",
            format!("{}: {message}", slot.as_str()),
            1,
        ),
    }
}
