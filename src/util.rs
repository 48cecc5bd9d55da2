use std::time::Duration;

/// First `max_chars` characters of `s`.
pub fn preview(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Cuts `s` to `max_len` characters, ending in "..." when shortened.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// Whole-second age like "2m 5s"; anything under a second is "0s".
pub fn format_age(age: Duration) -> String {
    let secs = Duration::from_secs(age.as_secs());
    humantime::format_duration(secs).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_shorter_than_limit() {
        assert_eq!(preview("abc", 9), "abc");
        assert_eq!(preview("abcdefghijk", 9), "abcdefghi");
        assert_eq!(preview("abc", 0), "");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer label", 10), "a much ...");
    }

    #[test]
    fn age_drops_subsecond_part() {
        assert_eq!(format_age(Duration::from_millis(125_900)), "2m 5s");
        assert_eq!(format_age(Duration::from_millis(400)), "0s");
    }
}
