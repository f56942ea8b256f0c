//! Per-step gate deciding whether the user may move forward.
//!
//! | Step | Requirement |
//! |------|-------------|
//! | 1 | name and age |
//! | 2 | current career, years of experience, education |
//! | 3 | at least 3 skills and at least 3 interests |
//! | 4 | at least 1 motivation, work style, salary |
//! | 5 | blocked only while the suggestion request is pending |

use serde::Serialize;

use crate::wizard::profile::Profile;
use crate::wizard::TOTAL_STEPS;

pub const MIN_SKILLS: usize = 3;
pub const MIN_INTERESTS: usize = 3;
pub const MIN_MOTIVATIONS: usize = 1;

/// A single unmet requirement, surfaced so the UI can say why Next is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Name,
    Age,
    CurrentCareer,
    YearsOfExperience,
    Education,
    Skills,
    Interests,
    Motivations,
    WorkStyle,
    Salary,
    RequestSettled,
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Requirement::Name => write!(f, "Enter your full name"),
            Requirement::Age => write!(f, "Enter your age"),
            Requirement::CurrentCareer => write!(f, "Enter your current job"),
            Requirement::YearsOfExperience => write!(f, "Enter your years of experience"),
            Requirement::Education => write!(f, "Choose your educational background"),
            Requirement::Skills => write!(f, "Choose at least {MIN_SKILLS} skills"),
            Requirement::Interests => write!(f, "Choose at least {MIN_INTERESTS} interests"),
            Requirement::Motivations => {
                write!(f, "Choose at least {MIN_MOTIVATIONS} motivation factor")
            }
            Requirement::WorkStyle => write!(f, "Choose your preferred working style"),
            Requirement::Salary => write!(f, "Choose your expected salary range"),
            Requirement::RequestSettled => write!(f, "Wait for the career suggestions to load"),
        }
    }
}

/// Lists every requirement of `step` the current state does not meet, in display order.
pub fn unmet_requirements(step: u8, profile: &Profile, pending: bool) -> Vec<Requirement> {
    let mut unmet = Vec::new();
    let mut require = |ok: bool, req: Requirement| {
        if !ok {
            unmet.push(req);
        }
    };

    match step {
        1 => {
            require(!profile.name.is_empty(), Requirement::Name);
            require(!profile.age.is_empty(), Requirement::Age);
        }
        2 => {
            require(!profile.current_career.is_empty(), Requirement::CurrentCareer);
            require(
                !profile.years_of_experience.is_empty(),
                Requirement::YearsOfExperience,
            );
            require(!profile.education.is_empty(), Requirement::Education);
        }
        3 => {
            require(profile.skills.len() >= MIN_SKILLS, Requirement::Skills);
            require(profile.interests.len() >= MIN_INTERESTS, Requirement::Interests);
        }
        4 => {
            require(
                profile.motivations.len() >= MIN_MOTIVATIONS,
                Requirement::Motivations,
            );
            require(!profile.work_style.is_empty(), Requirement::WorkStyle);
            require(!profile.salary.is_empty(), Requirement::Salary);
        }
        TOTAL_STEPS => require(!pending, Requirement::RequestSettled),
        _ => {}
    }

    unmet
}

pub fn can_advance(step: u8, profile: &Profile, pending: bool) -> bool {
    unmet_requirements(step, profile, pending).is_empty()
}
