use serde::{Deserialize, Serialize};

/// The accumulating user record. Empty strings mean "not filled in yet".
///
/// Serialized with the camelCase keys the suggestion prompt embeds verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub age: String,
    pub current_career: String,
    pub years_of_experience: String,
    pub education: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    /// Insertion order is display order. Never holds duplicates.
    pub motivations: Vec<String>,
    pub work_style: String,
    pub salary: String,
}

/// Scalar profile fields settable by `set_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Name,
    Age,
    CurrentCareer,
    YearsOfExperience,
    Education,
    WorkStyle,
    Salary,
}

/// Multi-select profile fields driven by toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArrayField {
    Skills,
    Interests,
    Motivations,
}

impl std::fmt::Display for ArrayField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ArrayField::Skills => "skills",
            ArrayField::Interests => "interests",
            ArrayField::Motivations => "motivations",
        };
        f.write_str(name)
    }
}

impl Profile {
    pub fn set(&mut self, field: ProfileField, value: String) {
        *self.scalar_mut(field) = value;
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Age => &self.age,
            ProfileField::CurrentCareer => &self.current_career,
            ProfileField::YearsOfExperience => &self.years_of_experience,
            ProfileField::Education => &self.education,
            ProfileField::WorkStyle => &self.work_style,
            ProfileField::Salary => &self.salary,
        }
    }

    pub fn contains(&self, field: ArrayField, value: &str) -> bool {
        match field {
            ArrayField::Skills => &self.skills,
            ArrayField::Interests => &self.interests,
            ArrayField::Motivations => &self.motivations,
        }
        .iter()
        .any(|v| v == value)
    }

    /// Removes `value` if present, otherwise appends it. Returns `true` when it was added.
    pub fn toggle(&mut self, field: ArrayField, value: &str) -> bool {
        let values = self.values_mut(field);
        match values.iter().position(|v| v == value) {
            Some(idx) => {
                values.remove(idx);
                false
            }
            None => {
                values.push(value.to_string());
                true
            }
        }
    }

    /// Appends a free-text motivation. Blank and duplicate entries are ignored.
    pub fn add_motivation(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || self.motivations.iter().any(|m| m == text) {
            return false;
        }
        self.motivations.push(text.to_string());
        true
    }

    fn scalar_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Age => &mut self.age,
            ProfileField::CurrentCareer => &mut self.current_career,
            ProfileField::YearsOfExperience => &mut self.years_of_experience,
            ProfileField::Education => &mut self.education,
            ProfileField::WorkStyle => &mut self.work_style,
            ProfileField::Salary => &mut self.salary,
        }
    }

    fn values_mut(&mut self, field: ArrayField) -> &mut Vec<String> {
        match field {
            ArrayField::Skills => &mut self.skills,
            ArrayField::Interests => &mut self.interests,
            ArrayField::Motivations => &mut self.motivations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_contents_and_order() {
        let mut profile = Profile::default();
        for m in ["Autonomy", "Security", "Recognition"] {
            profile.toggle(ArrayField::Motivations, m);
        }
        let before = profile.clone();

        // Toggling an existing middle value off and back on moves it to the end...
        assert!(!profile.toggle(ArrayField::Motivations, "Security"));
        assert_eq!(profile.motivations, vec!["Autonomy", "Recognition"]);
        assert!(profile.toggle(ArrayField::Motivations, "Security"));
        assert_eq!(profile.motivations, vec!["Autonomy", "Recognition", "Security"]);

        // ...while a value that was absent round-trips to the exact original.
        let mut profile = before.clone();
        assert!(profile.toggle(ArrayField::Motivations, "Creativity"));
        assert!(!profile.toggle(ArrayField::Motivations, "Creativity"));
        assert_eq!(profile, before);
    }

    #[test]
    fn test_toggle_removal_preserves_relative_order() {
        let mut profile = Profile::default();
        for s in ["Teamwork", "Leadership", "Creativity", "Organization"] {
            profile.toggle(ArrayField::Skills, s);
        }
        profile.toggle(ArrayField::Skills, "Leadership");
        assert_eq!(profile.skills, vec!["Teamwork", "Creativity", "Organization"]);
    }

    #[test]
    fn test_add_motivation_rejects_blank_and_duplicates() {
        let mut profile = Profile::default();
        assert!(!profile.add_motivation(""));
        assert!(!profile.add_motivation("   \t"));
        assert!(profile.add_motivation("Mentoring others"));
        assert!(!profile.add_motivation("Mentoring others"));
        assert!(!profile.add_motivation("  Mentoring others  "));
        assert_eq!(profile.motivations, vec!["Mentoring others"]);
    }

    #[test]
    fn test_add_motivation_never_duplicates_catalog_entry() {
        let mut profile = Profile::default();
        profile.toggle(ArrayField::Motivations, "Autonomy");
        assert!(!profile.add_motivation("Autonomy"));
        assert_eq!(profile.motivations.len(), 1);
    }

    #[test]
    fn test_set_and_get_scalar_fields() {
        let mut profile = Profile::default();
        profile.set(ProfileField::CurrentCareer, "Teacher".to_string());
        profile.set(ProfileField::WorkStyle, "remote".to_string());
        assert_eq!(profile.get(ProfileField::CurrentCareer), "Teacher");
        assert_eq!(profile.work_style, "remote");
        assert_eq!(profile.get(ProfileField::Salary), "");
    }

    #[test]
    fn test_profile_serializes_with_camel_case_keys() {
        let mut profile = Profile::default();
        profile.years_of_experience = "5".to_string();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["yearsOfExperience"], "5");
        assert!(json.get("currentCareer").is_some());
        assert!(json.get("workStyle").is_some());
    }

    #[test]
    fn test_field_names_deserialize_from_camel_case() {
        let field: ProfileField = serde_json::from_str("\"yearsOfExperience\"").unwrap();
        assert_eq!(field, ProfileField::YearsOfExperience);
        let array: ArrayField = serde_json::from_str("\"motivations\"").unwrap();
        assert_eq!(array, ArrayField::Motivations);
    }
}
