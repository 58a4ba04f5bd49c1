use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use advisr_core::CoercionPolicy;

use crate::event::IntentRequest;
use crate::handler::PortfolioHandler;
use crate::response::DialogResponse;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventContext {
    pub correlation_id: String,
}

impl EventContext {
    pub fn new(correlation_id: impl Into<String>) -> Self {
        Self { correlation_id: correlation_id.into() }
    }
}

impl Default for EventContext {
    fn default() -> Self {
        Self { correlation_id: "unknown-correlation-id".to_owned() }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandlerError {
    #[error("intent handler failure: {0}")]
    Internal(String),
}

/// A misrouted intent is a bot-configuration defect, not a user-input
/// problem; it propagates instead of producing a dialog response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("intent with name `{intent_name}` is not supported")]
    UnsupportedIntent { intent_name: String },
    #[error(transparent)]
    Handler(#[from] HandlerError),
}

pub trait IntentHandler: Send + Sync {
    fn intent_name(&self) -> &'static str;
    fn handle(
        &self,
        request: &IntentRequest,
        ctx: &EventContext,
    ) -> Result<DialogResponse, HandlerError>;
}

#[derive(Default)]
pub struct IntentDispatcher {
    handlers: HashMap<&'static str, Arc<dyn IntentHandler>>,
}

impl IntentDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<H>(&mut self, handler: H)
    where
        H: IntentHandler + 'static,
    {
        self.handlers.insert(handler.intent_name(), Arc::new(handler));
    }

    pub fn dispatch(
        &self,
        request: &IntentRequest,
        ctx: &EventContext,
    ) -> Result<DialogResponse, DispatchError> {
        let Some(handler) = self.handlers.get(request.current_intent.name.as_str()) else {
            return Err(DispatchError::UnsupportedIntent {
                intent_name: request.current_intent.name.clone(),
            });
        };

        handler.handle(request, ctx).map_err(DispatchError::from)
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

/// The production dispatcher: one bot, one supported intent.
pub fn default_dispatcher(policy: CoercionPolicy) -> IntentDispatcher {
    let mut dispatcher = IntentDispatcher::new();
    dispatcher.register(PortfolioHandler::new(policy));
    dispatcher
}
