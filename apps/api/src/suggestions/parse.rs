//! Tagged parsing of the suggestion service payload.
//!
//! Bad model output never becomes a hard error: it degrades to `Empty` with a
//! reason, so callers can tell "the service said no match" (`ServiceError`)
//! apart from "the payload was garbage" (`Empty(Malformed)`).

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::llm_client::strip_json_fences;
use crate::suggestions::{color_for_score, Suggestion, MAX_SUGGESTIONS};

/// Field holding the suggestion array in a well-formed payload.
pub const RESULTS_FIELD: &str = "resultInformations";

#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Suggestions(Vec<Suggestion>),
    Empty(EmptyReason),
    ServiceError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    /// Not JSON, or not a JSON object.
    Malformed(String),
    /// Valid JSON object without the results array.
    MissingResults,
    /// The results array held no usable entry.
    NoEntries,
}

impl std::fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptyReason::Malformed(detail) => {
                write!(f, "The suggestion service returned an unreadable response: {detail}")
            }
            EmptyReason::MissingResults => {
                write!(f, "The suggestion service response did not contain any results")
            }
            EmptyReason::NoEntries => write!(f, "The suggestion service found no careers"),
        }
    }
}

/// One entry as the model writes it. `match` may arrive as a float.
#[derive(Debug, Deserialize)]
struct RawCareerMatch {
    title: String,
    #[serde(rename = "match")]
    score: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    color: String,
}

pub fn parse_suggestions(raw: &str) -> ParseOutcome {
    let text = strip_json_fences(raw);

    let payload: Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(e) => return ParseOutcome::Empty(EmptyReason::Malformed(e.to_string())),
    };

    let Some(object) = payload.as_object() else {
        return ParseOutcome::Empty(EmptyReason::Malformed(
            "expected a JSON object".to_string(),
        ));
    };

    if let Some(entries) = object.get(RESULTS_FIELD).and_then(Value::as_array) {
        let suggestions = collect_entries(entries);
        return if suggestions.is_empty() {
            ParseOutcome::Empty(EmptyReason::NoEntries)
        } else {
            ParseOutcome::Suggestions(suggestions)
        };
    }

    match object.get("error") {
        Some(Value::String(message)) => ParseOutcome::ServiceError(message.clone()),
        Some(other) => ParseOutcome::ServiceError(other.to_string()),
        None => ParseOutcome::Empty(EmptyReason::MissingResults),
    }
}

fn collect_entries(entries: &[Value]) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = Vec::with_capacity(MAX_SUGGESTIONS);

    for entry in entries {
        if suggestions.len() == MAX_SUGGESTIONS {
            warn!(
                "Suggestion payload held {} entries, keeping the first {}",
                entries.len(),
                MAX_SUGGESTIONS
            );
            break;
        }

        let raw = match RawCareerMatch::deserialize(entry) {
            Ok(r) => r,
            Err(e) => {
                warn!("Skipping malformed suggestion entry: {e}");
                continue;
            }
        };

        let title = raw.title.trim();
        if title.is_empty() || suggestions.iter().any(|s| s.title == title) {
            warn!("Skipping suggestion with blank or duplicate title '{title}'");
            continue;
        }

        let match_score = clamp_score(raw.score);
        let color = if is_hex_color(raw.color.trim()) {
            raw.color.trim().to_string()
        } else {
            color_for_score(match_score).to_string()
        };

        suggestions.push(Suggestion {
            title: title.to_string(),
            match_score,
            description: raw.description.trim().to_string(),
            color,
        });
    }

    suggestions
}

fn clamp_score(score: f64) -> u8 {
    if score.is_nan() {
        return 0;
    }
    score.round().clamp(0.0, 100.0) as u8
}

/// `#rgb` or `#rrggbb`.
fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => {
            (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
