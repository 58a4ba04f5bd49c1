use advisr_core::{recommend, validate, CoercionPolicy, RiskLevel, ValidationOutcome};

use crate::dispatch::{EventContext, HandlerError, IntentHandler};
use crate::event::{slot_keys, IntentRequest, InvocationSource};
use crate::response::{DialogResponse, FulfillmentState, Message};

pub const RECOMMEND_PORTFOLIO_INTENT: &str = "recommendPortfolio";

/// Dialog management and fulfillment for the portfolio-recommendation
/// intent.
pub struct PortfolioHandler {
    policy: CoercionPolicy,
}

impl PortfolioHandler {
    pub fn new(policy: CoercionPolicy) -> Self {
        Self { policy }
    }

    fn manage_dialog(&self, request: &IntentRequest, ctx: &EventContext) -> DialogResponse {
        let outcome = validate(
            request.slot(slot_keys::AGE),
            request.slot(slot_keys::INVESTMENT_AMOUNT),
            self.policy,
        );

        match outcome {
            ValidationOutcome::Invalid { slot, message } => {
                tracing::debug!(
                    event_name = "portfolio.slot_rejected",
                    correlation_id = %ctx.correlation_id,
                    slot = slot.as_str(),
                    "slot value failed validation, re-eliciting"
                );

                // The violated slot is cleared in a copy so the platform
                // re-collects it; everything else is carried through as-is.
                let mut slots = request.current_intent.slots.clone();
                slots.insert(slot.as_str().to_owned(), None);

                DialogResponse::elicit_slot(
                    request.session_attributes.clone(),
                    request.current_intent.name.clone(),
                    slots,
                    slot.as_str(),
                    Message::plain(message),
                )
            }
            ValidationOutcome::Valid => DialogResponse::delegate(
                request.session_attributes.clone(),
                request.current_intent.slots.clone(),
            ),
        }
    }

    fn fulfill(&self, request: &IntentRequest, ctx: &EventContext) -> DialogResponse {
        let risk = RiskLevel::parse(request.slot(slot_keys::RISK_LEVEL));
        let allocation = recommend(risk);

        tracing::debug!(
            event_name = "portfolio.recommendation_computed",
            correlation_id = %ctx.correlation_id,
            risk = ?risk,
            allocation = %allocation,
            "recommendation computed for fulfillment"
        );

        DialogResponse::close(
            request.session_attributes.clone(),
            FulfillmentState::Fulfilled,
            Message::plain(format!(
                "Based on your risk level, we recommend a portfolio of {allocation}"
            )),
        )
    }
}

impl IntentHandler for PortfolioHandler {
    fn intent_name(&self) -> &'static str {
        RECOMMEND_PORTFOLIO_INTENT
    }

    fn handle(
        &self,
        request: &IntentRequest,
        ctx: &EventContext,
    ) -> Result<DialogResponse, HandlerError> {
        let response = match request.invocation_source {
            InvocationSource::DialogCodeHook => self.manage_dialog(request, ctx),
            InvocationSource::FulfillmentCodeHook => self.fulfill(request, ctx),
        };

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use advisr_core::validation::{AGE_RANGE_MESSAGE, AMOUNT_RANGE_MESSAGE};
    use advisr_core::CoercionPolicy;

    use super::{PortfolioHandler, RECOMMEND_PORTFOLIO_INTENT};
    use crate::dispatch::{EventContext, IntentHandler};
    use crate::event::{slot_keys, CurrentIntent, IntentRequest, InvocationSource};
    use crate::response::{DialogAction, FulfillmentState};

    fn slot_map(entries: &[(&str, Option<&str>)]) -> HashMap<String, Option<String>> {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_owned(), value.map(str::to_owned)))
            .collect()
    }

    fn request(
        source: InvocationSource,
        slots: HashMap<String, Option<String>>,
    ) -> IntentRequest {
        let mut session_attributes = HashMap::new();
        session_attributes.insert("conversationId".to_owned(), "c-1".to_owned());

        IntentRequest {
            invocation_source: source,
            current_intent: CurrentIntent {
                name: RECOMMEND_PORTFOLIO_INTENT.to_owned(),
                slots,
            },
            session_attributes,
        }
    }

    fn handle(handler: &PortfolioHandler, request: &IntentRequest) -> crate::DialogResponse {
        handler.handle(request, &EventContext::default()).expect("handler should not fail")
    }

    #[test]
    fn out_of_range_age_elicits_the_age_slot_cleared() {
        let handler = PortfolioHandler::new(CoercionPolicy::Strict);
        let request = request(
            InvocationSource::DialogCodeHook,
            slot_map(&[
                (slot_keys::FIRST_NAME, Some("Ada")),
                (slot_keys::AGE, Some("70")),
                (slot_keys::INVESTMENT_AMOUNT, None),
                (slot_keys::RISK_LEVEL, None),
            ]),
        );

        let response = handle(&handler, &request);

        let DialogAction::ElicitSlot { intent_name, slots, slot_to_elicit, message } =
            response.dialog_action
        else {
            panic!("expected elicit-slot response");
        };
        assert_eq!(intent_name, RECOMMEND_PORTFOLIO_INTENT);
        assert_eq!(slot_to_elicit, "age");
        assert_eq!(slots.get(slot_keys::AGE), Some(&None));
        assert_eq!(slots.get(slot_keys::FIRST_NAME), Some(&Some("Ada".to_owned())));
        assert_eq!(message.content, AGE_RANGE_MESSAGE);
        assert_eq!(
            response.session_attributes.get("conversationId").map(String::as_str),
            Some("c-1")
        );
    }

    #[test]
    fn low_amount_elicits_the_amount_slot() {
        let handler = PortfolioHandler::new(CoercionPolicy::Strict);
        let request = request(
            InvocationSource::DialogCodeHook,
            slot_map(&[
                (slot_keys::AGE, Some("30")),
                (slot_keys::INVESTMENT_AMOUNT, Some("3000")),
            ]),
        );

        let response = handle(&handler, &request);

        let DialogAction::ElicitSlot { slot_to_elicit, message, .. } = response.dialog_action
        else {
            panic!("expected elicit-slot response");
        };
        assert_eq!(slot_to_elicit, "investmentAmount");
        assert_eq!(message.content, AMOUNT_RANGE_MESSAGE);
    }

    #[test]
    fn valid_slots_delegate_with_the_mapping_unmodified() {
        let handler = PortfolioHandler::new(CoercionPolicy::Strict);
        let slots = slot_map(&[
            (slot_keys::FIRST_NAME, Some("Ada")),
            (slot_keys::AGE, Some("30")),
            (slot_keys::INVESTMENT_AMOUNT, Some("10000")),
            (slot_keys::RISK_LEVEL, None),
        ]);
        let request = request(InvocationSource::DialogCodeHook, slots.clone());

        let response = handle(&handler, &request);

        let DialogAction::Delegate { slots: returned } = response.dialog_action else {
            panic!("expected delegate response");
        };
        assert_eq!(returned, slots);
    }

    #[test]
    fn empty_slots_delegate_rather_than_fail() {
        let handler = PortfolioHandler::new(CoercionPolicy::Strict);
        let request = request(InvocationSource::DialogCodeHook, HashMap::new());

        let response = handle(&handler, &request);

        assert!(matches!(response.dialog_action, DialogAction::Delegate { .. }));
    }

    #[test]
    fn fulfillment_closes_with_the_risk_keyed_recommendation() {
        let handler = PortfolioHandler::new(CoercionPolicy::Strict);
        let request = request(
            InvocationSource::FulfillmentCodeHook,
            slot_map(&[
                (slot_keys::AGE, Some("30")),
                (slot_keys::INVESTMENT_AMOUNT, Some("10000")),
                (slot_keys::RISK_LEVEL, Some("Medium")),
            ]),
        );

        let response = handle(&handler, &request);

        let DialogAction::Close { fulfillment_state, message } = response.dialog_action else {
            panic!("expected close response");
        };
        assert_eq!(fulfillment_state, FulfillmentState::Fulfilled);
        assert_eq!(
            message.content,
            "Based on your risk level, we recommend a portfolio of \
             40% bonds (AGG), 60% equities (SPY)"
        );
    }

    #[test]
    fn fulfillment_with_missing_risk_level_uses_the_default_split() {
        let handler = PortfolioHandler::new(CoercionPolicy::Strict);
        let request = request(InvocationSource::FulfillmentCodeHook, HashMap::new());

        let response = handle(&handler, &request);

        let DialogAction::Close { message, .. } = response.dialog_action else {
            panic!("expected close response");
        };
        assert!(message.content.contains("20% bonds (AGG), 80% equities (SPY)"));
    }

    #[test]
    fn fulfillment_ignores_dialog_validation_entirely() {
        // By the time the platform invokes fulfillment it owns slot
        // confirmation; an out-of-range age no longer re-elicits.
        let handler = PortfolioHandler::new(CoercionPolicy::Strict);
        let request = request(
            InvocationSource::FulfillmentCodeHook,
            slot_map(&[(slot_keys::AGE, Some("70")), (slot_keys::RISK_LEVEL, Some("Low"))]),
        );

        let response = handle(&handler, &request);

        assert!(matches!(response.dialog_action, DialogAction::Close { .. }));
    }

    #[test]
    fn legacy_policy_delegates_on_unparseable_age() {
        let handler = PortfolioHandler::new(CoercionPolicy::Legacy);
        let request = request(
            InvocationSource::DialogCodeHook,
            slot_map(&[(slot_keys::AGE, Some("sixty"))]),
        );

        let response = handle(&handler, &request);

        assert!(matches!(response.dialog_action, DialogAction::Delegate { .. }));
    }

    #[test]
    fn strict_policy_re_elicits_unparseable_age() {
        let handler = PortfolioHandler::new(CoercionPolicy::Strict);
        let request = request(
            InvocationSource::DialogCodeHook,
            slot_map(&[(slot_keys::AGE, Some("sixty"))]),
        );

        let response = handle(&handler, &request);

        let DialogAction::ElicitSlot { slot_to_elicit, .. } = response.dialog_action else {
            panic!("expected elicit-slot response");
        };
        assert_eq!(slot_to_elicit, "age");
    }
}
