/// Read a text-encoded view count. Absent or non-numeric values count as zero.
pub fn parse_view_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok()).unwrap_or(0)
}

/// Format a count with en-US thousands grouping (`1234567` -> `"1,234,567"`).
pub fn format_views(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `m:ss` below one hour, `h:mm:ss` from one hour up.
pub fn format_clock(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_views(0), "0");
        assert_eq!(format_views(999), "999");
        assert_eq!(format_views(1000), "1,000");
        assert_eq!(format_views(1234567), "1,234,567");
        assert_eq!(format_views(100000), "100,000");
    }

    #[test]
    fn view_count_defaults_to_zero() {
        assert_eq!(parse_view_count(None), 0);
        assert_eq!(parse_view_count(Some("")), 0);
        assert_eq!(parse_view_count(Some("n/a")), 0);
        assert_eq!(parse_view_count(Some("2000")), 2000);
    }

    #[test]
    fn clock_format() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(59), "0:59");
        assert_eq!(format_clock(605), "10:05");
        assert_eq!(format_clock(3725), "1:02:05");
    }
}
