use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Simplified Chinese.
    Sc,
    /// Traditional Chinese.
    Tc,
    #[default]
    En,
    /// Japanese.
    Jp,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Self::Sc, Self::Tc, Self::En, Self::Jp];

    pub fn code(self) -> &'static str {
        match self {
            Self::Sc => "sc",
            Self::Tc => "tc",
            Self::En => "en",
            Self::Jp => "jp",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale '{0}' (expected sc, tc, en or jp)")]
pub struct ParseLocaleError(pub String);

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code() == code)
            .ok_or_else(|| ParseLocaleError(s.to_string()))
    }
}
