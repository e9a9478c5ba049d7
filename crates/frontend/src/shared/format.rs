use chrono::NaiveDate;

/// Render a byte count as a human-readable size label.
///
/// Uses 1024-based units and trims trailing zeros from the two-decimal
/// rounding ("1.5 KB", "2 MB").
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = (bytes as f64).log(1024.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let rounded = (value * 100.0).round() / 100.0;
    let mut label = format!("{:.2}", rounded);
    while label.ends_with('0') {
        label.pop();
    }
    if label.ends_with('.') {
        label.pop();
    }

    format!("{} {}", label, UNITS[exponent])
}

/// Render an upload date the way library cards show it ("Jan 15, 2024")
pub fn format_upload_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(331_776), "324 KB");
        assert_eq!(format_file_size(2_516_582), "2.4 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_format_upload_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(format_upload_date(date), "Jan 15, 2024");
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_upload_date(date), "Jan 5, 2024");
    }
}
