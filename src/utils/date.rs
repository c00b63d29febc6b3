use chrono::NaiveDate;

/// "2024-03-20" renders as "March 20, 2024".
pub fn format_long_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
