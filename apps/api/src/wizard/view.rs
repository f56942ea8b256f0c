//! Render-ready snapshot of the current step. The front end draws exactly
//! what is here and keeps no wizard state of its own.

use serde::Serialize;

use crate::layout::{layout_results, ResultLayout};
use crate::wizard::catalog::ChoiceOption;
use crate::wizard::gate::Requirement;
use crate::wizard::machine::Wizard;
use crate::wizard::{REQUEST_STEP, TOTAL_STEPS};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepView {
    pub step: u8,
    pub total_steps: u8,
    pub title: &'static str,
    /// Progress bar fill for the questionnaire steps; absent on the results step.
    pub progress_percent: Option<u8>,
    pub back_disabled: bool,
    pub next_disabled: bool,
    /// Absent on the results step, which only offers restart.
    pub next_label: Option<&'static str>,
    pub unmet: Vec<UnmetRequirement>,
    pub pending_request: bool,
    /// Shown on the request step (to offer a retry) and on the results step.
    pub last_error: Option<String>,
    pub content: StepContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnmetRequirement {
    pub requirement: Requirement,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckOption {
    pub value: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepContent {
    #[serde(rename_all = "camelCase")]
    Personal { name: String, age: String },
    #[serde(rename_all = "camelCase")]
    Career {
        current_career: String,
        years_of_experience: String,
        education: Vec<SelectOption>,
    },
    #[serde(rename_all = "camelCase")]
    SkillsAndInterests {
        skills: Vec<CheckOption>,
        interests: Vec<CheckOption>,
    },
    #[serde(rename_all = "camelCase")]
    Motivation {
        motivations: Vec<CheckOption>,
        /// Every selected motivation in selection order, free-text ones included.
        selected_motivations: Vec<String>,
        custom_motivation: String,
        work_style: Vec<SelectOption>,
        salary: Vec<SelectOption>,
    },
    Results(ResultLayout),
}

pub fn step_title(step: u8) -> &'static str {
    match step {
        1 => "Personal Information",
        2 => "Current Career",
        3 => "Skills and Interests",
        4 => "Motivation and Expectation",
        _ => "The Most Suitable Career Alternatives for You",
    }
}

impl StepView {
    pub fn from_wizard(wizard: &Wizard) -> Self {
        let state = wizard.state();
        let step = state.current_step;
        let terminal = wizard.is_terminal();

        let progress_percent = if terminal {
            None
        } else {
            Some((u32::from(step) * 100 / u32::from(REQUEST_STEP)) as u8)
        };

        let next_label = match step {
            TOTAL_STEPS => None,
            REQUEST_STEP => Some("See The Results"),
            _ => Some("Next"),
        };

        let last_error = if step >= REQUEST_STEP {
            state.last_error.clone()
        } else {
            None
        };

        Self {
            step,
            total_steps: TOTAL_STEPS,
            title: step_title(step),
            progress_percent,
            back_disabled: step == 1 || terminal || state.pending_request,
            next_disabled: wizard.next_disabled(),
            next_label,
            unmet: wizard
                .unmet_requirements()
                .into_iter()
                .map(|requirement| UnmetRequirement {
                    requirement,
                    message: requirement.to_string(),
                })
                .collect(),
            pending_request: state.pending_request,
            last_error,
            content: step_content(wizard),
        }
    }
}

fn step_content(wizard: &Wizard) -> StepContent {
    let state = wizard.state();
    let profile = &state.profile;
    let catalog = wizard.catalog();

    match state.current_step {
        1 => StepContent::Personal {
            name: profile.name.clone(),
            age: profile.age.clone(),
        },
        2 => StepContent::Career {
            current_career: profile.current_career.clone(),
            years_of_experience: profile.years_of_experience.clone(),
            education: select_options(&catalog.education_levels, &profile.education),
        },
        3 => StepContent::SkillsAndInterests {
            skills: check_options(&catalog.skills, &profile.skills),
            interests: check_options(&catalog.interests, &profile.interests),
        },
        4 => StepContent::Motivation {
            motivations: check_options(&catalog.motivations, &profile.motivations),
            selected_motivations: profile.motivations.clone(),
            custom_motivation: state.custom_motivation.clone(),
            work_style: select_options(&catalog.work_styles, &profile.work_style),
            salary: select_options(&catalog.salary_bands, &profile.salary),
        },
        _ => StepContent::Results(layout_results(&profile.name, &state.suggestions)),
    }
}

fn check_options(catalog: &[String], selected: &[String]) -> Vec<CheckOption> {
    catalog
        .iter()
        .map(|value| CheckOption {
            value: value.clone(),
            checked: selected.contains(value),
        })
        .collect()
}

fn select_options(options: &[ChoiceOption], current: &str) -> Vec<SelectOption> {
    options
        .iter()
        .map(|o| SelectOption {
            value: o.value.clone(),
            label: o.label.clone(),
            selected: o.value == current,
        })
        .collect()
}
