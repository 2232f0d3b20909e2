use serde::{Deserialize, Serialize};

/// Skills shown on every result. Fixed demo data, not derived from the résumé.
pub const TOP_SKILLS: [&str; 5] = ["Python", "Machine Learning", "NLP", "Flask", "Data Analysis"];

/// Outcome of screening one résumé against one job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningResult {
    /// Cosine similarity × 100, two decimals. Negative when the texts point apart.
    pub score: f64,
    pub summary: String,
    pub top_skills: Vec<String>,
}

impl ScreeningResult {
    pub fn new(score: f64, summary: String) -> Self {
        Self {
            score,
            summary,
            top_skills: TOP_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
