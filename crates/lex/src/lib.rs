pub mod dispatch;
pub mod event;
pub mod handler;
pub mod response;

pub use dispatch::{
    default_dispatcher, DispatchError, EventContext, HandlerError, IntentDispatcher, IntentHandler,
};
pub use event::{
    slot_keys, CurrentIntent, IntentRequest, InvocationSource, SessionAttributes, SlotMap,
};
pub use handler::{PortfolioHandler, RECOMMEND_PORTFOLIO_INTENT};
pub use response::{ContentType, DialogAction, DialogResponse, FulfillmentState, Message};

/// Entry point for one inbound platform event. The raw request and the
/// computed response are logged for observability; they are not part of the
/// functional contract.
pub fn handle_event(
    dispatcher: &IntentDispatcher,
    request: &IntentRequest,
    ctx: &EventContext,
) -> Result<DialogResponse, DispatchError> {
    tracing::debug!(
        event_name = "lex.request.received",
        correlation_id = %ctx.correlation_id,
        intent = %request.current_intent.name,
        source = ?request.invocation_source,
        request = ?request,
        "intent request received"
    );

    let response = dispatcher.dispatch(request, ctx)?;

    tracing::debug!(
        event_name = "lex.response.computed",
        correlation_id = %ctx.correlation_id,
        action = response.action_type(),
        response = ?response,
        "dialog response computed"
    );

    Ok(response)
}
