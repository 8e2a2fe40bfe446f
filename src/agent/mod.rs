//! Completion-API integration: the coach persona, free-text bet extraction,
//! one-shot guidance prompts, and reply annotation parsing.

pub mod annotate;
pub mod client;
pub mod coach;
pub mod extractor;
pub mod guides;

pub use annotate::{find_labeled_block, LabeledBlock, RECEIPTS_LABEL, SUGGESTED_BET_LABEL};
pub use client::{ChatMessage, CompletionClient, CompletionConfig};
pub use coach::{ask_coach, CoachReply, DEFAULT_PERSONA, DEFAULT_RISK_TAG};
pub use extractor::extract_bet;
