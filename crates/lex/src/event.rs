use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Slot values arrive as strings; a slot the platform has not collected yet
/// is explicit null on the wire.
pub type SlotMap = HashMap<String, Option<String>>;

/// Opaque per-conversation state owned by the host platform. Passed through
/// every response unchanged.
pub type SessionAttributes = HashMap<String, String>;

pub mod slot_keys {
    pub const FIRST_NAME: &str = "firstName";
    pub const AGE: &str = "age";
    pub const INVESTMENT_AMOUNT: &str = "investmentAmount";
    pub const RISK_LEVEL: &str = "riskLevel";
}

/// Where the platform is in the conversation: still collecting slots, or
/// ready for final fulfillment. Any other wire value is a contract violation
/// and fails deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationSource {
    DialogCodeHook,
    FulfillmentCodeHook,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default)]
    pub slots: SlotMap,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub invocation_source: InvocationSource,
    pub current_intent: CurrentIntent,
    #[serde(default)]
    pub session_attributes: SessionAttributes,
}

impl IntentRequest {
    /// Raw value of a slot, if the platform has collected one.
    pub fn slot(&self, key: &str) -> Option<&str> {
        self.current_intent.slots.get(key).and_then(|value| value.as_deref())
    }
}
