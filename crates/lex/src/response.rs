use serde::{Deserialize, Serialize};

use crate::event::{SessionAttributes, SlotMap};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    PlainText,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    pub fn plain(content: impl Into<String>) -> Self {
        Self { content_type: ContentType::PlainText, content: content.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
}

/// The three dialog actions this bot can hand back to the platform, tagged
/// on the wire as `dialogAction.type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    ElicitSlot {
        #[serde(rename = "intentName")]
        intent_name: String,
        slots: SlotMap,
        #[serde(rename = "slotToElicit")]
        slot_to_elicit: String,
        message: Message,
    },
    Delegate {
        slots: SlotMap,
    },
    Close {
        #[serde(rename = "fulfillmentState")]
        fulfillment_state: FulfillmentState,
        message: Message,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}

impl DialogResponse {
    /// Ask the user to re-supply one slot. The caller is responsible for
    /// clearing the violated slot in `slots` first.
    pub fn elicit_slot(
        session_attributes: SessionAttributes,
        intent_name: impl Into<String>,
        slots: SlotMap,
        slot_to_elicit: impl Into<String>,
        message: Message,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::ElicitSlot {
                intent_name: intent_name.into(),
                slots,
                slot_to_elicit: slot_to_elicit.into(),
                message,
            },
        }
    }

    /// Hand dialog management back to the platform's slot-filling engine.
    pub fn delegate(session_attributes: SessionAttributes, slots: SlotMap) -> Self {
        Self { session_attributes, dialog_action: DialogAction::Delegate { slots } }
    }

    /// Terminal response carrying the fulfillment result.
    pub fn close(
        session_attributes: SessionAttributes,
        fulfillment_state: FulfillmentState,
        message: Message,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::Close { fulfillment_state, message },
        }
    }

    pub fn action_type(&self) -> &'static str {
        match self.dialog_action {
            DialogAction::ElicitSlot { .. } => "ElicitSlot",
            DialogAction::Delegate { .. } => "Delegate",
            DialogAction::Close { .. } => "Close",
        }
    }
}
