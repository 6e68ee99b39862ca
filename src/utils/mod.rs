//! Small shared helpers.

pub mod paths;

pub use paths::normalize_path;

/// Format an integer with thousands separators (e.g. `1234567` -> `1,234,567`).
pub fn format_with_commas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_commas() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1000), "1,000");
        assert_eq!(format_with_commas(1234567), "1,234,567");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("java\\com\\A.java"), "java/com/A.java");
        assert_eq!(normalize_path("res/layout/main.xml"), "res/layout/main.xml");
    }
}
