//! Orbit placement: positions each suggestion bubble relative to the profile
//! anchor at the center of the diagram.
//!
//! Placement depends only on the bubble's own score, never on its neighbours:
//! equal scores land on the same spot and overlap.

use serde::Serialize;

use crate::suggestions::Suggestion;

/// Label shown in the center when the user left their name blank.
pub const CENTER_PLACEHOLDER: &str = "Your Name";

const FAR_DISTANCE: i32 = 200;
const MID_DISTANCE: i32 = 110;
const NEAR_DISTANCE: i32 = 20;

/// Seconds before the first bubble appears, and the stagger between bubbles.
const ORBIT_REVEAL_DELAY_S: f32 = 0.8;
const REVEAL_STAGGER_S: f32 = 0.2;

/// Dashed guide ring around the center anchor. Diameters in px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideRing {
    pub compact_diameter: u32,
    pub wide_diameter: u32,
}

pub const GUIDE_RINGS: [GuideRing; 3] = [
    GuideRing {
        compact_diameter: 128,
        wide_diameter: 160,
    },
    GuideRing {
        compact_diameter: 208,
        wide_diameter: 256,
    },
    GuideRing {
        compact_diameter: 288,
        wide_diameter: 352,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bubble {
    pub title: String,
    pub match_score: u8,
    pub color: String,
    /// Offset from the center, in px. Both axes carry the same tier distance.
    pub dx: i32,
    pub dy: i32,
    pub reveal_delay_s: f32,
}

/// Three-tier distance from the center. Thresholds are inclusive.
pub fn distance(score: u8) -> i32 {
    if score >= 95 {
        FAR_DISTANCE
    } else if score >= 85 {
        MID_DISTANCE
    } else {
        NEAR_DISTANCE
    }
}

pub fn center_label(name: &str) -> &str {
    if name.is_empty() {
        CENTER_PLACEHOLDER
    } else {
        name
    }
}

pub fn place_bubbles(suggestions: &[Suggestion]) -> Vec<Bubble> {
    suggestions
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let d = distance(s.match_score);
            Bubble {
                title: s.title.clone(),
                match_score: s.match_score,
                color: s.color.clone(),
                dx: d,
                dy: d,
                reveal_delay_s: ORBIT_REVEAL_DELAY_S + REVEAL_STAGGER_S * index as f32,
            }
        })
        .collect()
}
