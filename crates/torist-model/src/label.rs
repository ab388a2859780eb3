use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one loaded checklist release, displayed as `"{source} ({version})"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChecklistLabel {
    pub source: String,
    pub version: String,
}

impl ChecklistLabel {
    pub fn new(source: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for ChecklistLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.source, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_source_and_version() {
        assert_eq!(ChecklistLabel::new("IOC", "15.1").to_string(), "IOC (15.1)");
        assert_eq!(
            ChecklistLabel::new("China CBR", "Unknown").to_string(),
            "China CBR (Unknown)"
        );
    }
}
