use serde::Serialize;

use crate::suggestions::Suggestion;

const LIST_REVEAL_DELAY_S: f32 = 1.2;
const REVEAL_STAGGER_S: f32 = 0.2;

/// One row of the ranked result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub rank_label: String,
    pub title: String,
    pub description: String,
    pub match_score: u8,
    /// Progress bar fill, 0 to 100 percent.
    pub bar_width_percent: u8,
    pub color: String,
    pub reveal_delay_s: f32,
}

/// Ranks suggestions in the order the service returned them. No re-sorting.
pub fn rank_suggestions(suggestions: &[Suggestion]) -> Vec<RankedEntry> {
    suggestions
        .iter()
        .enumerate()
        .map(|(index, s)| RankedEntry {
            rank_label: (index + 1).to_string(),
            title: s.title.clone(),
            description: s.description.clone(),
            match_score: s.match_score,
            bar_width_percent: s.match_score.min(100),
            color: s.color.clone(),
            reveal_delay_s: LIST_REVEAL_DELAY_S + REVEAL_STAGGER_S * index as f32,
        })
        .collect()
}
