//! Content categories a script can be written for.
//!
//! The set is closed: every category is known at compile time and looked up
//! by its id.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScriptError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    Educational,
    NewsAnalysis,
    RawStories,
    ViralContent,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub description: &'static str,
    pub tone: &'static str,
    pub cta_style: &'static str,
    pub examples: &'static [&'static str],
}

static CATEGORIES: [Category; 4] = [
    Category {
        id: CategoryId::Educational,
        name: "📚 Educational Content",
        description: "Professional forex education and market analysis",
        tone: "professional, educational, trustworthy",
        cta_style: "Learning-focused CTA",
        examples: &["How to read candlesticks", "What is leverage"],
    },
    Category {
        id: CategoryId::NewsAnalysis,
        name: "📰 News & Market Analysis",
        description: "Current market events and insights",
        tone: "analytical, timely, authoritative",
        cta_style: "Opinion/discussion CTA",
        examples: &["Fed decision impact", "NFP data reaction"],
    },
    Category {
        id: CategoryId::RawStories,
        name: "🎭 Raw Trading Stories",
        description: "Honest trading experiences with humor",
        tone: "conversational, vulnerable, story-driven",
        cta_style: "Relatable community CTA",
        examples: &["How I lost $500 in 4 seconds", "My worst FOMO trade"],
    },
    Category {
        id: CategoryId::ViralContent,
        name: "🔥 Viral & Trending",
        description: "Social media trends and memes",
        tone: "trendy, energetic, social media savvy",
        cta_style: "Engagement/challenge CTA",
        examples: &["POV: You're a forex trader"],
    },
];

impl CategoryId {
    pub const ALL: [CategoryId; 4] = [
        CategoryId::Educational,
        CategoryId::NewsAnalysis,
        CategoryId::RawStories,
        CategoryId::ViralContent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Educational => "educational",
            CategoryId::NewsAnalysis => "news_analysis",
            CategoryId::RawStories => "raw_stories",
            CategoryId::ViralContent => "viral_content",
        }
    }

    pub fn category(&self) -> &'static Category {
        match self {
            CategoryId::Educational => &CATEGORIES[0],
            CategoryId::NewsAnalysis => &CATEGORIES[1],
            CategoryId::RawStories => &CATEGORIES[2],
            CategoryId::ViralContent => &CATEGORIES[3],
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self> {
        CategoryId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ScriptError::UnknownCategory(s.to_string()))
    }
}

/// Look up a category by its string id
pub fn lookup(id: &str) -> Result<&'static Category> {
    Ok(id.parse::<CategoryId>()?.category())
}

/// All categories in display order
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}
