//! One-shot guidance prompts: a personalized betting plan, a pre-bet
//! checklist, and session-notes summarization. All thin completion calls
//! with fixed system instructions.

use crate::agent::client::{ChatMessage, CompletionClient};
use crate::error::Result;
use serde_json::Value;

const PLAN_PROMPT: &str = "Build a personalized betting plan with 5 sections:\n\
1) Risk & unit sizing (Kelly-lite default),\n\
2) Market focus (which markets to target/avoid and why),\n\
3) Routine checklist (pre-bet),\n\
4) Bankroll rails (stop loss, heat checks),\n\
5) Improvement loop (post-mortems, CLV tracking).\n\
Return concise, bullet-first output.";

const CHECKLIST_PROMPT: &str = "Return a sharp, compact pre-bet checklist (3–7 bullets) \
for the given sport/market. Write for speed.";

const NOTES_PROMPT: &str = "Summarize into three sections with bullets:\n\
1) Summary,\n\
2) Key Takeaways,\n\
3) Action Items.";

const DEFAULT_CHECKLIST_SUBJECT: &str = "NFL Totals";

/// Personalized betting plan from goal/bankroll/horizon hints
pub async fn build_plan(
    client: &CompletionClient,
    goal: &str,
    bankroll: &str,
    horizon_weeks: &str,
) -> Result<String> {
    client
        .chat(
            vec![
                ChatMessage::system(PLAN_PROMPT),
                ChatMessage::user(format!(
                    "Goal:{goal} | Bankroll:{bankroll} | HorizonWeeks:{horizon_weeks}"
                )),
            ],
            0.3,
        )
        .await
}

/// Compact pre-bet checklist for a sport or market
pub async fn build_checklist(client: &CompletionClient, subject: &str) -> Result<String> {
    let subject = if subject.is_empty() {
        DEFAULT_CHECKLIST_SUBJECT
    } else {
        subject
    };
    client
        .chat(
            vec![
                ChatMessage::system(CHECKLIST_PROMPT),
                ChatMessage::user(subject),
            ],
            0.2,
        )
        .await
}

/// Summarize recent chat messages into session notes
pub async fn summarize_session(
    client: &CompletionClient,
    last_messages: &Value,
) -> Result<String> {
    client
        .chat(
            vec![
                ChatMessage::system(NOTES_PROMPT),
                ChatMessage::user(serde_json::to_string(last_messages)?),
            ],
            0.2,
        )
        .await
}
