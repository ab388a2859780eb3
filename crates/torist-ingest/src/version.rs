//! Release labels derived from checklist file names.

use std::sync::LazyLock;

use regex::Regex;

/// Version reported when a file name carries no recognizable release marker.
pub const UNKNOWN_VERSION: &str = "Unknown";

/// Edition markers such as `7ed`.
static EDITION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)ed").expect("Invalid edition regex"));

/// Numbered releases such as `JP8`, `ver 2`, `v7`. The digit run is taken whole.
static NUMBERED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:JP|ver|v)[ ._-]?([0-9]+)").expect("Invalid numbered release regex")
});

/// Dotted versions (`v10.0`, `15.1`) or years (`2023`).
static DOTTED_OR_YEAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(v[0-9]+\.[0-9]+|[0-9]+\.[0-9]+|20[0-9]{2})").expect("Invalid version regex")
});

/// Derives a version label from a file name.
///
/// Patterns are tried in priority order and the first match wins:
///
/// 1. edition marker: `OSJ_7ed_list.xlsx` -> `7th`
/// 2. numbered release: `JP_v8_checklist.xls` -> `v8`
/// 3. dotted version or year: `IOC_15.1_Master.xlsx` -> `15.1`, `China_CBR_2023.xlsx` -> `2023`
///
/// Anything else yields [`UNKNOWN_VERSION`].
pub fn extract_version(file_name: &str) -> String {
    if let Some(caps) = EDITION_REGEX.captures(file_name) {
        return format!("{}th", &caps[1]);
    }
    if let Some(caps) = NUMBERED_REGEX.captures(file_name) {
        return format!("v{}", &caps[1]);
    }
    if let Some(m) = DOTTED_OR_YEAR_REGEX.find(file_name) {
        return m.as_str().to_string();
    }
    UNKNOWN_VERSION.to_string()
}
