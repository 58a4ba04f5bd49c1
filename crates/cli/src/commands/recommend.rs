use advisr_core::{recommend, RiskLevel};

use super::CommandResult;

pub fn run(risk_level: &str) -> CommandResult {
    let allocation = recommend(RiskLevel::parse(Some(risk_level)));
    CommandResult::success("recommend", allocation.to_string())
}
