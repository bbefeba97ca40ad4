//! Feedback categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::food::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Feedback,
    Complaint,
    Suggestion,
}

impl FeedbackKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feedback => "feedback",
            Self::Complaint => "complaint",
            Self::Suggestion => "suggestion",
        }
    }
}

impl FromStr for FeedbackKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "feedback" => Ok(Self::Feedback),
            "complaint" => Ok(Self::Complaint),
            "suggestion" => Ok(Self::Suggestion),
            _ => Err(UnknownVariant {
                kind: "feedback type",
                value: s.to_owned(),
            }),
        }
    }
}
