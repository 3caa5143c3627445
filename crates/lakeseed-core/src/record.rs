use chrono::NaiveDate;

/// A row shape that a tabular sink can persist.
///
/// Every record of a given type yields exactly `COLUMNS.len()` fields, in
/// column order, already rendered as text.
pub trait TabularRecord {
    /// Table name, also used as the output file stem.
    const TABLE: &'static str;
    /// Header row in column order.
    const COLUMNS: &'static [&'static str];

    fn to_fields(&self) -> Vec<String>;
}

pub fn format_date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub fn format_currency(value: f64) -> String {
    format!("{value:.2}")
}

pub fn format_flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

pub fn format_optional_date(value: Option<NaiveDate>) -> String {
    value.map(format_date).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_scalar_fields() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 9).unwrap();
        assert_eq!(format_date(date), "2021-03-09");
        assert_eq!(format_currency(1234.5), "1234.50");
        assert_eq!(format_flag(true), "1");
        assert_eq!(format_flag(false), "0");
        assert_eq!(format_optional_date(None), "");
    }
}
