//! Labeled fenced-JSON extraction from coach replies.
//!
//! The coach prompt asks the model to append machine-readable blocks to its
//! prose: a code fence whose info line reads `json RECEIPTS` (or
//! `json SUGGESTED_BET`) followed by a JSON object. This module scans the
//! reply fence-by-fence instead of pattern matching, so a block that exists
//! but fails to parse is distinguishable from one that is missing.

use serde_json::Value;

pub const RECEIPTS_LABEL: &str = "RECEIPTS";
pub const SUGGESTED_BET_LABEL: &str = "SUGGESTED_BET";

const FENCE: &str = "```";

/// Outcome of looking up one label in a reply
#[derive(Debug, Clone, PartialEq)]
pub enum LabeledBlock {
    /// A block with this label was found and its interior parsed as JSON
    Parsed(Value),
    /// A block with this label was found but its interior is not valid JSON
    Unparsable,
    /// No block with this label exists in the reply
    Absent,
}

impl LabeledBlock {
    /// Collapse to the wire contract: parsed value or null
    pub fn into_value(self) -> Option<Value> {
        match self {
            LabeledBlock::Parsed(value) => Some(value),
            LabeledBlock::Unparsable | LabeledBlock::Absent => None,
        }
    }
}

/// Scan `reply` for the first fenced code block whose info line is `json`
/// followed by `label`. Labels match case-insensitively; only the first
/// matching block is considered. An unterminated fence never matches.
pub fn find_labeled_block(reply: &str, label: &str) -> LabeledBlock {
    let mut inside_match = false;
    let mut inside_other = false;
    let mut body = String::new();

    for line in reply.lines() {
        let trimmed = line.trim_start();
        if let Some(info) = trimmed.strip_prefix(FENCE) {
            if inside_match {
                return parse_interior(&body);
            }
            if inside_other {
                inside_other = false;
                continue;
            }
            if info_matches(info, label) {
                inside_match = true;
                body.clear();
            } else {
                inside_other = true;
            }
            continue;
        }
        if inside_match {
            body.push_str(line);
            body.push('\n');
        }
    }

    LabeledBlock::Absent
}

/// The info line must carry a json tag and then the label, e.g. "json RECEIPTS"
fn info_matches(info: &str, label: &str) -> bool {
    let mut words = info.split_whitespace();
    words
        .next()
        .is_some_and(|tag| tag.eq_ignore_ascii_case("json"))
        && words.next().is_some_and(|l| l.eq_ignore_ascii_case(label))
}

fn parse_interior(body: &str) -> LabeledBlock {
    match serde_json::from_str(body.trim()) {
        Ok(value) => LabeledBlock::Parsed(value),
        Err(_) => LabeledBlock::Unparsable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_and_parses_labeled_block() {
        let reply = "Fast game expected.\n```json RECEIPTS\n{\"pace\": \"fast\"}\n```\nGood luck.";
        assert_eq!(
            find_labeled_block(reply, RECEIPTS_LABEL),
            LabeledBlock::Parsed(json!({"pace": "fast"}))
        );
    }

    #[test]
    fn label_match_is_case_insensitive() {
        let reply = "```JSON receipts\n{\"pace\": \"slow\"}\n```";
        assert_eq!(
            find_labeled_block(reply, RECEIPTS_LABEL),
            LabeledBlock::Parsed(json!({"pace": "slow"}))
        );
    }

    #[test]
    fn missing_label_is_absent() {
        let reply = "No blocks here, just prose about the Knicks.";
        assert_eq!(find_labeled_block(reply, RECEIPTS_LABEL), LabeledBlock::Absent);

        let unlabeled = "```json\n{\"pace\": \"fast\"}\n```";
        assert_eq!(
            find_labeled_block(unlabeled, RECEIPTS_LABEL),
            LabeledBlock::Absent
        );
    }

    #[test]
    fn invalid_interior_is_unparsable_not_absent() {
        let reply = "```json RECEIPTS\nnot json at all\n```";
        assert_eq!(
            find_labeled_block(reply, RECEIPTS_LABEL),
            LabeledBlock::Unparsable
        );
    }

    #[test]
    fn first_matching_block_wins() {
        let reply = "```json RECEIPTS\n{\"n\": 1}\n```\n```json RECEIPTS\n{\"n\": 2}\n```";
        assert_eq!(
            find_labeled_block(reply, RECEIPTS_LABEL),
            LabeledBlock::Parsed(json!({"n": 1}))
        );
    }

    #[test]
    fn other_blocks_are_skipped() {
        let reply = "```text\nnothing\n```\n```json SUGGESTED_BET\n{\"event\": \"Lakers ML\"}\n```";
        assert_eq!(find_labeled_block(reply, RECEIPTS_LABEL), LabeledBlock::Absent);
        assert_eq!(
            find_labeled_block(reply, SUGGESTED_BET_LABEL),
            LabeledBlock::Parsed(json!({"event": "Lakers ML"}))
        );
    }

    #[test]
    fn unterminated_fence_is_absent() {
        let reply = "```json RECEIPTS\n{\"pace\": \"fast\"}";
        assert_eq!(find_labeled_block(reply, RECEIPTS_LABEL), LabeledBlock::Absent);
    }

    #[test]
    fn into_value_collapses_to_null_contract() {
        assert_eq!(LabeledBlock::Parsed(json!(1)).into_value(), Some(json!(1)));
        assert_eq!(LabeledBlock::Unparsable.into_value(), None);
        assert_eq!(LabeledBlock::Absent.into_value(), None);
    }
}
