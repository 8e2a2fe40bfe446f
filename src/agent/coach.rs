//! The betting coach: persona-flavored chat replies with machine-readable
//! annotations attached to the prose.

use crate::agent::annotate::{find_labeled_block, RECEIPTS_LABEL, SUGGESTED_BET_LABEL};
use crate::agent::client::{ChatMessage, CompletionClient};
use crate::error::Result;
use serde_json::Value;

pub const DEFAULT_PERSONA: &str = "sharp";
pub const DEFAULT_RISK_TAG: &str = "balanced";

const COACH_TEMPERATURE: f32 = 0.4;

/// Coach reply plus whatever structured annotations the model attached
#[derive(Debug, Clone)]
pub struct CoachReply {
    pub reply: String,
    /// Structured rationale (pace, injuries, weather, ...) if the model
    /// emitted a parseable RECEIPTS block
    pub receipts: Option<Value>,
    /// Structured bet proposal if the model emitted a parseable
    /// SUGGESTED_BET block
    pub suggested_bet: Option<Value>,
}

fn system_prompt(persona: &str, risk_tag: &str) -> String {
    format!(
        "You are the AI Betting Coach. \
         Speak clearly and concisely, show two angles when appropriate (1 safe, 1 higher variance). \
         ALWAYS surface a 'Receipts' JSON with categories: epa_play, pace, injuries_inactives, trenches_ol_dl, weather, market_view. \
         If a clean recommendation emerges, ALSO emit a 'SuggestedBet' JSON: {{event, market, odds, units, sportTag}}. \
         Default stake = Kelly-lite 0.5 (but do not over-commit; include a quick bank-rails note when riskTag=aggressive). \
         Persona={persona}. Risk={risk_tag}."
    )
}

fn user_prompt(message: &str) -> String {
    format!(
        "User message:\n{message}\n\n\
         Output format:\n\
         1) A concise natural-language answer.\n\
         2) A fenced JSON block labelled \"{RECEIPTS_LABEL}\": {{epa_play, pace, injuries_inactives, trenches_ol_dl, weather, market_view}}. Keep values short.\n\
         3) (Optional) A fenced JSON block labelled \"{SUGGESTED_BET_LABEL}\": {{event, market, odds, units, sportTag}} if and only if confidence is reasonable.\n\
         Keep everything user-friendly; no purple prose."
    )
}

/// One coach round-trip. Annotation blocks that are missing or unparsable
/// yield None; the prose reply is always returned verbatim.
pub async fn ask_coach(
    client: &CompletionClient,
    message: &str,
    persona: &str,
    risk_tag: &str,
) -> Result<CoachReply> {
    let reply = client
        .chat(
            vec![
                ChatMessage::system(system_prompt(persona, risk_tag)),
                ChatMessage::user(user_prompt(message)),
            ],
            COACH_TEMPERATURE,
        )
        .await?;

    Ok(CoachReply {
        receipts: find_labeled_block(&reply, RECEIPTS_LABEL).into_value(),
        suggested_bet: find_labeled_block(&reply, SUGGESTED_BET_LABEL).into_value(),
        reply,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_carries_persona_and_risk() {
        let prompt = system_prompt("degen", "aggressive");
        assert!(prompt.contains("Persona=degen"));
        assert!(prompt.contains("Risk=aggressive"));
    }

    #[test]
    fn user_prompt_embeds_message_and_labels() {
        let prompt = user_prompt("Lakers tonight?");
        assert!(prompt.contains("Lakers tonight?"));
        assert!(prompt.contains(RECEIPTS_LABEL));
        assert!(prompt.contains(SUGGESTED_BET_LABEL));
    }
}
