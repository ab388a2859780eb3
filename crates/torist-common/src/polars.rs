//! Polars value and column helpers.
//!
//! Every checklist table in the workspace is a frame of nullable string
//! columns. These helpers convert between that representation and plain
//! Rust values.

use polars::prelude::{Column, DataFrame, DataType, NamedFrom, PolarsResult, Series};

/// Formats a floating-point number without trailing zeros after the decimal point.
///
/// Integer-valued floats such as spreadsheet row numbers render without a
/// fractional part.
///
/// # Examples
///
/// ```
/// use torist_common::format_numeric;
///
/// assert_eq!(format_numeric(12.0), "12");
/// assert_eq!(format_numeric(15.1), "15.1");
/// assert_eq!(format_numeric(100.0), "100");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Reads a column as nullable strings, casting non-string dtypes.
pub fn string_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    let values = column.str()?;
    Ok(values
        .iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

/// Builds a nullable string column.
pub fn string_column(name: &str, values: Vec<Option<String>>) -> Column {
    Series::new(name.into(), values).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(0.0), "0");
        // Trailing zeros in the integer part stay
        assert_eq!(format_numeric(40.0), "40");
        assert_eq!(format_numeric(1000.0), "1000");
        assert_eq!(format_numeric(10.25), "10.25");
    }

    #[test]
    fn test_string_column_round_trip() {
        let column = string_column("Japanese", vec![Some("クロウタドリ".to_string()), None]);
        let df = DataFrame::new(vec![column]).unwrap();

        let values = string_values(&df, "Japanese").unwrap();
        assert_eq!(values, vec![Some("クロウタドリ".to_string()), None]);
    }

    #[test]
    fn test_string_values_casts_numbers() {
        let df = DataFrame::new(vec![Series::new("Index".into(), &[1i64, 2]).into()]).unwrap();

        let values = string_values(&df, "Index").unwrap();
        assert_eq!(values, vec![Some("1".to_string()), Some("2".to_string())]);
    }

    #[test]
    fn test_string_column_builds_with_named_from() {
        let column = string_column("Family", vec![Some("Turdidae".to_string())]);
        assert_eq!(column.name().as_str(), "Family");
        assert_eq!(column.dtype(), &DataType::String);
    }

    #[test]
    fn test_string_values_missing_column() {
        let df = DataFrame::new(vec![string_column("A", vec![None])]).unwrap();
        assert!(string_values(&df, "B").is_err());
    }
}
