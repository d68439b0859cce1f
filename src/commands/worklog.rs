use anyhow::{bail, Result};

use crate::client::JiraSession;

pub fn run(session: &JiraSession, key: &str, time: &str, comment: Option<&str>) -> Result<()> {
    let seconds = parse_duration(time)?;
    session.add_worklog(key, seconds, comment.unwrap_or(""))?;

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    println!("Logged {}h {}m on {}", hours, minutes, key);

    Ok(())
}

/// Accepts "1h30m", "45m", "90s", or a bare number of seconds.
fn parse_duration(raw: &str) -> Result<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        bail!("Empty duration");
    }

    if raw.chars().all(|c| c.is_ascii_digit()) {
        let seconds: i64 = raw.parse()?;
        if seconds == 0 {
            bail!("Duration must be positive");
        }
        return Ok(seconds);
    }

    let mut total: i64 = 0;
    let mut digits = String::new();
    for c in raw.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        if digits.is_empty() {
            bail!("Invalid duration '{}'", raw);
        }
        let value: i64 = digits.parse()?;
        digits.clear();

        total += match c.to_ascii_lowercase() {
            'h' => value * 3600,
            'm' => value * 60,
            's' => value,
            _ => bail!("Unknown duration unit '{}' in '{}'", c, raw),
        };
    }

    if !digits.is_empty() {
        bail!("Missing unit after '{}' in '{}'", digits, raw);
    }
    if total == 0 {
        bail!("Duration must be positive");
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_bare_seconds() {
        assert_eq!(parse_duration("3600").unwrap(), 3600);
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_duration("1h30m").unwrap(), 5400);
        assert_eq!(parse_duration("45m").unwrap(), 2700);
        assert_eq!(parse_duration("90s").unwrap(), 90);
        assert_eq!(parse_duration("2h").unwrap(), 7200);
    }

    #[test]
    fn test_parse_mixed_case() {
        assert_eq!(parse_duration("1H30M").unwrap(), 5400);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("h").is_err());
        assert!(parse_duration("1x").is_err());
        assert!(parse_duration("1h30").is_err());
        assert!(parse_duration("ninety").is_err());
    }

    #[test]
    fn test_parse_rejects_zero() {
        assert!(parse_duration("0").is_err());
        assert!(parse_duration("0m").is_err());
    }

    proptest! {
        #[test]
        fn prop_hms_roundtrip(hours in 0i64..24, minutes in 0i64..60, seconds in 1i64..60) {
            let spec = format!("{}h{}m{}s", hours, minutes, seconds);
            let parsed = parse_duration(&spec).unwrap();
            prop_assert_eq!(parsed, hours * 3600 + minutes * 60 + seconds);
        }

        #[test]
        fn prop_bare_seconds_identity(seconds in 1i64..1_000_000) {
            prop_assert_eq!(parse_duration(&seconds.to_string()).unwrap(), seconds);
        }
    }
}
