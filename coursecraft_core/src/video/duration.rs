use once_cell::sync::Lazy;
use regex::Regex;

static DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"PT([0-9]+H)?([0-9]+M)?([0-9]+S)?").unwrap());

/// Parse an ISO-8601 style `PT#H#M#S` duration into whole seconds.
///
/// Every component is optional. Text without a `PT` marker, or components the
/// pattern cannot read (fractional seconds, day designators), count as zero.
pub fn parse_duration(raw: &str) -> u64 {
    let Some(caps) = DURATION_RE.captures(raw) else {
        return 0;
    };

    let component = |idx: usize| -> u64 {
        caps.get(idx)
            .map(|m| m.as_str())
            .and_then(|s| s[..s.len() - 1].parse::<u64>().ok())
            .unwrap_or(0)
    };

    component(1)
        .saturating_mul(3600)
        .saturating_add(component(2).saturating_mul(60))
        .saturating_add(component(3))
}

/// Same as [`parse_duration`], treating an absent value as zero.
pub fn parse_optional_duration(raw: Option<&str>) -> u64 {
    raw.map(parse_duration).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_component_subset() {
        assert_eq!(parse_duration("PT1H2M3S"), 3723);
        assert_eq!(parse_duration("PT1H"), 3600);
        assert_eq!(parse_duration("PT2M"), 120);
        assert_eq!(parse_duration("PT45S"), 45);
        assert_eq!(parse_duration("PT1H30M"), 5400);
        assert_eq!(parse_duration("PT1H15S"), 3615);
        assert_eq!(parse_duration("PT10M5S"), 605);
    }

    #[test]
    fn empty_and_absent_are_zero() {
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("PT"), 0);
        assert_eq!(parse_optional_duration(None), 0);
        assert_eq!(parse_optional_duration(Some("PT5M")), 300);
    }

    #[test]
    fn unreadable_text_is_zero() {
        assert_eq!(parse_duration("garbage"), 0);
        assert_eq!(parse_duration("P1D"), 0);
        // fractional seconds stop the match right after "PT"
        assert_eq!(parse_duration("PT1.5S"), 0);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(parse_duration("PT99999999999999999999H"), 0);
        assert_eq!(parse_duration("PT18446744073709551615H"), u64::MAX);
    }
}
