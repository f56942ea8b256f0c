// Prompt constants for the career suggestion request.
// Reuses the JSON-only closing line from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::wizard::profile::Profile;

/// System prompt for the suggestion request.
pub const SUGGESTION_SYSTEM: &str = "The user is looking to make a career change. \
    Your job is to find the 3 most suitable career opportunities for the user \
    based on the information you received.";

/// Suggestion prompt template. Replace `{profile_json}`, `{current_career}`,
/// `{motivations}` and `{json_only}` before sending.
pub const SUGGESTION_PROMPT_TEMPLATE: &str = r##"User personal information: {profile_json}

Based on the information provided, return exactly 3 career suggestions.

Format your response as a valid JSON object with a field called "resultInformations" containing an array of career objects. Each career object should have the following structure:
{
    "title": "Career Title",
    "match": 92,
    "description": "Career description",
    "color": "#00FF00"
}
"match" is a number between 0-100 indicating match percentage.
"color" is a hex color code representing suitability (green for high match, yellow for medium, red for low).

Let the maximum match be 95 percent, the second highest match be 85 percent, and the last highest be 75 percent.

If you cannot find suitable careers based on currentCareer: "{current_career}" and motivations: "{motivations}", return a JSON object with an "error" field containing your message.

{json_only}"##;

/// Fills the template with the full profile, including empty-string defaults.
pub fn build_suggestion_prompt(profile: &Profile) -> String {
    let profile_json = serde_json::to_string(profile).unwrap_or_default();
    SUGGESTION_PROMPT_TEMPLATE
        .replace("{profile_json}", &profile_json)
        .replace("{current_career}", &profile.current_career)
        .replace("{motivations}", &profile.motivations.join(","))
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
}
