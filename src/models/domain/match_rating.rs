use serde::{Deserialize, Serialize};

/// Student's answer to "did the generated page match what you described?".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum MatchRating {
    #[serde(rename = "sim", alias = "yes")]
    Yes,
    #[serde(rename = "parcial", alias = "partial")]
    Partial,
    #[serde(rename = "nao", alias = "no", alias = "não")]
    No,
}

impl MatchRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchRating::Yes => "sim",
            MatchRating::Partial => "parcial",
            MatchRating::No => "nao",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "sim" | "yes" => Some(MatchRating::Yes),
            "parcial" | "partial" => Some(MatchRating::Partial),
            "nao" | "não" | "no" => Some(MatchRating::No),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
