use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScriptError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationLabel {
    #[serde(rename = "15s")]
    Short,
    #[default]
    #[serde(rename = "30s")]
    Medium,
    #[serde(rename = "60s")]
    Long,
}

/// Target word budgets for one script length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationProfile {
    pub label: DurationLabel,
    pub total: usize,
    pub hook: usize,
    pub body: usize,
    pub cta: usize,
}

impl DurationLabel {
    pub const ALL: [DurationLabel; 3] = [
        DurationLabel::Short,
        DurationLabel::Medium,
        DurationLabel::Long,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationLabel::Short => "15s",
            DurationLabel::Medium => "30s",
            DurationLabel::Long => "60s",
        }
    }

    pub fn profile(&self) -> DurationProfile {
        let (total, hook, body, cta) = match self {
            DurationLabel::Short => (35, 8, 20, 7),
            DurationLabel::Medium => (75, 15, 45, 15),
            DurationLabel::Long => (150, 25, 100, 25),
        };
        DurationProfile {
            label: *self,
            total,
            hook,
            body,
            cta,
        }
    }
}

impl fmt::Display for DurationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationLabel {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self> {
        DurationLabel::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScriptError::UnknownDuration(s.to_string()))
    }
}
