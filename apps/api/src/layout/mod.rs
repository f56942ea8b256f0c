// Result layout: orbit placement of suggestion bubbles around the profile
// anchor, plus the ranked list shown underneath. Pure and deterministic.

pub mod orbit;
pub mod ranking;

use serde::Serialize;

use crate::suggestions::Suggestion;

use orbit::{center_label, place_bubbles, Bubble, GuideRing, GUIDE_RINGS};
use ranking::{rank_suggestions, RankedEntry};

/// Everything the results step needs to draw the diagram and the list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultLayout {
    pub center_label: String,
    pub rings: Vec<GuideRing>,
    pub bubbles: Vec<Bubble>,
    pub ranked: Vec<RankedEntry>,
}

pub fn layout_results(name: &str, suggestions: &[Suggestion]) -> ResultLayout {
    ResultLayout {
        center_label: center_label(name).to_string(),
        rings: GUIDE_RINGS.to_vec(),
        bubbles: place_bubbles(suggestions),
        ranked: rank_suggestions(suggestions),
    }
}
