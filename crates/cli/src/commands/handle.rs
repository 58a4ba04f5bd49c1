use std::fs;
use std::io::Read;
use std::path::Path;

use advisr_core::config::{AppConfig, LoadOptions};
use advisr_lex::{default_dispatcher, handle_event, EventContext, IntentRequest};

use super::CommandResult;

pub fn run(file: Option<&Path>, correlation_id: Option<&str>) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return CommandResult::failure("handle", "config", error.to_string(), 2),
    };
    crate::init_logging(&config);

    let raw = match read_event(file) {
        Ok(raw) => raw,
        Err(error) => return CommandResult::failure("handle", "io", error, 2),
    };

    let request: IntentRequest = match serde_json::from_str(&raw) {
        Ok(request) => request,
        Err(error) => {
            return CommandResult::failure(
                "handle",
                "deserialize",
                format!("event is not a valid intent request: {error}"),
                2,
            )
        }
    };

    let ctx = correlation_id.map(EventContext::new).unwrap_or_default();
    let dispatcher = default_dispatcher(config.validation.coercion);

    match handle_event(&dispatcher, &request, &ctx) {
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(output) => CommandResult { exit_code: 0, output },
            Err(error) => CommandResult::failure("handle", "serialize", error.to_string(), 2),
        },
        Err(error) => CommandResult::failure("handle", "dispatch", error.to_string(), 1),
    }
}

fn read_event(file: Option<&Path>) -> Result<String, String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .map_err(|error| format!("could not read event file `{}`: {error}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .map_err(|error| format!("could not read event from stdin: {error}"))?;
            Ok(raw)
        }
    }
}
