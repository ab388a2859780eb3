//! Listing-index normalization.

/// Normalizes a listing index value.
///
/// Spreadsheet readers often coerce integer ids to floats, so `"12.0"` is
/// turned back into `"12"`. Empty input yields an empty string.
///
/// # Examples
///
/// ```
/// use torist_common::normalize_index;
///
/// assert_eq!(normalize_index("12.0"), "12");
/// assert_eq!(normalize_index(" 0105 "), "0105");
/// assert_eq!(normalize_index(""), "");
/// ```
pub fn normalize_index(value: &str) -> String {
    let trimmed = value.trim();
    trimmed.strip_suffix(".0").unwrap_or(trimmed).to_string()
}
