use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    duration::{DurationLabel, DurationProfile},
    error::{Result, ScriptError},
    taxonomy::CategoryId,
};

/// What the user's seed text is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    #[default]
    Topic,
    Hook,
    Cta,
}

impl InputKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            InputKind::Topic => "Title/Topic",
            InputKind::Hook => "Hook",
            InputKind::Cta => "CTA",
        }
    }

    /// Prefix used when the seed is placed into the prompt
    pub fn prompt_prefix(&self) -> &'static str {
        match self {
            InputKind::Topic => "Topic",
            InputKind::Hook => "Hook",
            InputKind::Cta => "CTA",
        }
    }
}

impl FromStr for InputKind {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "topic" | "title" | "title/topic" => Ok(InputKind::Topic),
            "hook" => Ok(InputKind::Hook),
            "cta" => Ok(InputKind::Cta),
            _ => Err(ScriptError::UnknownInputKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRequest {
    pub input_text: String,
    pub input_kind: InputKind,
    pub category: CategoryId,
    pub duration: DurationLabel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSegments {
    pub hook: String,
    pub body: String,
    pub cta: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCounts {
    pub hook: usize,
    pub body: usize,
    pub cta: usize,
    pub total: usize,
}

/// Target language for transcreation.
///
/// Any code is accepted; codes outside the known set display as themselves.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Language(String);

impl Language {
    pub const KNOWN: [(&'static str, &'static str); 4] = [
        ("th", "Thai"),
        ("vi", "Vietnamese"),
        ("zhs", "Chinese (Simplified)"),
        ("zht", "Chinese (Traditional)"),
    ];

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn display_name(&self) -> &str {
        for (code, name) in Self::KNOWN {
            if code == self.0 {
                return name;
            }
        }
        &self.0
    }

    pub fn is_known(&self) -> bool {
        Self::KNOWN.iter().any(|(code, _)| *code == self.0)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscreationRequest {
    pub source: ScriptSegments,
    pub language: Language,
}

/// A successfully generated script with its word counts and targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedScript {
    pub request: ScriptRequest,
    pub segments: ScriptSegments,
    pub word_counts: WordCounts,
    pub target: DurationProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscreatedScript {
    pub language: Language,
    pub segments: ScriptSegments,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_language_names() {
        assert_eq!(Language::new("th").display_name(), "Thai");
        assert_eq!(Language::new("zht").display_name(), "Chinese (Traditional)");
        assert!(Language::new("vi").is_known());
    }

    #[test]
    fn unknown_language_uses_code_as_label() {
        let lang = Language::new("xx");
        assert_eq!(lang.display_name(), "xx");
        assert_eq!(lang.to_string(), "xx");
        assert!(!lang.is_known());
    }

    #[test]
    fn input_kind_accepts_display_names() {
        assert_eq!("Title/Topic".parse::<InputKind>().unwrap(), InputKind::Topic);
        assert_eq!("CTA".parse::<InputKind>().unwrap(), InputKind::Cta);
        assert!("intro".parse::<InputKind>().is_err());
    }
}
