//! Selectable values offered by the wizard, injected at construction so tests
//! and deployments can swap them without touching the state machine.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A select-box option: the stored `value` and the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardCatalog {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub motivations: Vec<String>,
    pub education_levels: Vec<ChoiceOption>,
    pub work_styles: Vec<ChoiceOption>,
    pub salary_bands: Vec<ChoiceOption>,
}

impl Default for WizardCatalog {
    fn default() -> Self {
        Self {
            skills: strings(&[
                "Analytical Thinking",
                "Communication",
                "Creativity",
                "Problem Solving",
                "Organization",
                "Leadership",
                "Technical Skills",
                "Teamwork",
                "Time Management",
            ]),
            interests: strings(&[
                "Technology",
                "Art",
                "Science",
                "Health",
                "Education",
                "Business",
                "Media",
                "Sports",
                "Travel",
                "Design",
                "Music",
                "Food",
            ]),
            motivations: strings(&[
                "High Salary",
                "Work-Life Balance",
                "Career Development",
                "Flexible Working",
                "Social Impact",
                "Autonomy",
                "Creativity",
                "Recognition",
                "Security",
            ]),
            education_levels: vec![
                ChoiceOption::new("highschool", "High School"),
                ChoiceOption::new("associate", "Associate Degree"),
                ChoiceOption::new("licence", "Licence"),
                ChoiceOption::new("degree", "Degree"),
                ChoiceOption::new("doctorate", "Doctorate"),
            ],
            work_styles: vec![
                ChoiceOption::new("remote", "Remote"),
                ChoiceOption::new("hybrid", "Hybrid"),
                ChoiceOption::new("office", "Office"),
                ChoiceOption::new("field", "Field"),
            ],
            salary_bands: vec![
                ChoiceOption::new("0-10000", "Up to 10,000 TL"),
                ChoiceOption::new("10000-20000", "10,000 TL - 20,000 TL"),
                ChoiceOption::new("20000-30000", "20,000 TL - 30,000 TL"),
                ChoiceOption::new("30000-50000", "30,000 TL - 50,000 TL"),
                ChoiceOption::new("50000+", "50,000 TL and above"),
            ],
        }
    }
}

impl WizardCatalog {
    /// Loads a catalog from a JSON file with the same camelCase shape as `GET /api/v1/catalog`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file '{}'", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Catalog file '{}' is not valid JSON", path.display()))
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
