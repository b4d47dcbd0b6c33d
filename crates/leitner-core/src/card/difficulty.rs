use serde::{Deserialize, Serialize};

/// How the learner did on a single card.
///
/// | Variant | Transition                        |
/// |---------|-----------------------------------|
/// | Wrong   | reset to bucket 0                 |
/// | Hard    | demote one bucket, floor at 0     |
/// | Easy    | promote one bucket, no upper cap  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerDifficulty {
    /// The learner did not know the answer
    Wrong,
    /// Answered correctly, with effort
    Hard,
    /// Answered correctly without hesitation
    Easy,
}

impl AnswerDifficulty {
    /// Every variant, in increasing order of confidence
    pub const ALL: [AnswerDifficulty; 3] = [
        AnswerDifficulty::Wrong,
        AnswerDifficulty::Hard,
        AnswerDifficulty::Easy,
    ];

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerDifficulty::Wrong => "wrong",
            AnswerDifficulty::Hard => "hard",
            AnswerDifficulty::Easy => "easy",
        }
    }

    /// Whether the answer counts as correct
    #[inline]
    pub fn is_correct(&self) -> bool {
        !matches!(self, AnswerDifficulty::Wrong)
    }
}

impl std::fmt::Display for AnswerDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AnswerDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wrong" | "0" => Ok(AnswerDifficulty::Wrong),
            "hard" | "1" => Ok(AnswerDifficulty::Hard),
            "easy" | "2" => Ok(AnswerDifficulty::Easy),
            _ => Err(format!("Unknown answer difficulty: {}", s)),
        }
    }
}
