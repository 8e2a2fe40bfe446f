//! Free-text bet extraction.
//!
//! Sends the user's raw text to the completion API with a fixed strict-JSON
//! instruction and normalizes whatever comes back into the bet shape. The
//! model is untrusted: garbage degrades to an empty object, never an error,
//! so downstream callers must tolerate an empty-field bet.

use crate::agent::client::{ChatMessage, CompletionClient};
use crate::domain::detect_sport;
use crate::error::Result;
use serde_json::{Map, Number, Value};
use tracing::warn;

const EXTRACTION_PROMPT: &str = r#"Extract a clean JSON bet from free text.
Schema: { "event": string, "market": string, "odds": string, "units": number, "sportTag": string }.
Strict JSON only. Infer sportTag if obvious."#;

const EXTRACTION_TEMPERATURE: f32 = 0.2;

/// Extract a bet-shaped partial from free text. The call is never retried.
pub async fn extract_bet(client: &CompletionClient, text: &str) -> Result<Value> {
    let reply = client
        .chat(
            vec![
                ChatMessage::system(EXTRACTION_PROMPT),
                ChatMessage::user(text),
            ],
            EXTRACTION_TEMPERATURE,
        )
        .await?;

    Ok(normalize(parse_reply(&reply)))
}

/// Strict-JSON parse of the model reply; anything that is not a JSON object
/// degrades to an empty one.
fn parse_reply(reply: &str) -> Value {
    match serde_json::from_str::<Value>(reply) {
        Ok(Value::Object(map)) => Value::Object(map),
        Ok(other) => {
            warn!(got = %other, "extraction reply was not a JSON object");
            Value::Object(Map::new())
        }
        Err(e) => {
            warn!(error = %e, "failed to parse extraction reply");
            Value::Object(Map::new())
        }
    }
}

/// Post-process the model output: coerce `units` to a number and infer
/// `sportTag` from the event text when the model left it out.
fn normalize(mut parsed: Value) -> Value {
    let Some(map) = parsed.as_object_mut() else {
        return parsed;
    };

    // units may arrive as a string ("2.5") or some other non-number
    let coerced_units = match map.get("units") {
        Some(Value::Number(_)) | None => None,
        Some(Value::String(s)) => Some(
            s.trim()
                .parse::<f64>()
                .ok()
                .filter(|u| u.is_finite())
                .unwrap_or(0.0),
        ),
        Some(_) => Some(0.0),
    };
    if let Some(units) = coerced_units {
        map.insert(
            "units".to_string(),
            Number::from_f64(units).map(Value::Number).unwrap_or(Value::from(0)),
        );
    }

    let has_tag = matches!(map.get("sportTag"), Some(Value::String(tag)) if !tag.is_empty());
    let inferred = match map.get("event") {
        Some(Value::String(event)) if !event.is_empty() => Some(detect_sport(event).to_string()),
        _ => None,
    };
    if !has_tag {
        if let Some(tag) = inferred {
            map.insert("sportTag".to_string(), Value::String(tag));
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_json_reply_degrades_to_empty_object() {
        assert_eq!(parse_reply("sorry, I can't do that"), json!({}));
        assert_eq!(parse_reply(""), json!({}));
    }

    #[test]
    fn non_object_json_degrades_to_empty_object() {
        assert_eq!(parse_reply("[1,2,3]"), json!({}));
        assert_eq!(parse_reply("42"), json!({}));
    }

    #[test]
    fn numeric_units_pass_through() {
        let out = normalize(json!({"event": "Lakers ML", "units": 2.5}));
        assert_eq!(out["units"], json!(2.5));
    }

    #[test]
    fn string_units_are_coerced() {
        let out = normalize(json!({"units": "3"}));
        assert_eq!(out["units"], json!(3.0));

        let out = normalize(json!({"units": "a lot"}));
        assert_eq!(out["units"], json!(0.0));

        let out = normalize(json!({"units": true}));
        assert_eq!(out["units"], json!(0.0));
    }

    #[test]
    fn absent_units_stay_absent() {
        let out = normalize(json!({"event": "Cowboys -3"}));
        assert!(out.get("units").is_none());
    }

    #[test]
    fn sport_tag_inferred_from_event() {
        let out = normalize(json!({"event": "Cowboys vs Eagles"}));
        assert_eq!(out["sportTag"], json!("NFL"));

        let out = normalize(json!({"event": "Lakers at Celtics"}));
        assert_eq!(out["sportTag"], json!("NBA"));
    }

    #[test]
    fn existing_sport_tag_is_kept() {
        let out = normalize(json!({"event": "Cowboys vs Eagles", "sportTag": "Custom"}));
        assert_eq!(out["sportTag"], json!("Custom"));
    }

    #[test]
    fn no_event_means_no_inference() {
        let out = normalize(json!({"market": "spread"}));
        assert!(out.get("sportTag").is_none());
    }

    #[test]
    fn empty_sport_tag_is_replaced() {
        let out = normalize(json!({"event": "Yankees ML", "sportTag": ""}));
        assert_eq!(out["sportTag"], json!("MLB"));
    }
}
