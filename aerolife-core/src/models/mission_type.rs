use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::EstimateError;

/// Mission profile selected on the input form.
///
/// The estimate carries this value but does not branch on it yet: every
/// profile uses the same consumption rates and margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissionType {
    #[default]
    ShortLeo,
    MediumLunar,
    LongDeepSpace,
}

impl MissionType {
    pub fn all() -> &'static [MissionType] {
        &[
            MissionType::ShortLeo,
            MissionType::MediumLunar,
            MissionType::LongDeepSpace,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShortLeo => "short-leo",
            Self::MediumLunar => "medium-lunar",
            Self::LongDeepSpace => "long-deep-space",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ShortLeo => "short (leo)",
            Self::MediumLunar => "medium (lunar)",
            Self::LongDeepSpace => "long (deep space / mars)",
        }
    }

    /// Accepts either the identifier (`medium-lunar`) or the form label
    /// (`medium (lunar)`), ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == wanted || t.label() == wanted)
    }
}

impl fmt::Display for MissionType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissionType {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| EstimateError::invalid_input("mission_type", s))
    }
}
