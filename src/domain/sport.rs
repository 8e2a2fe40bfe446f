//! Sport classification and display helpers.

/// Keyword table for tagging events by sport. Matching is case-insensitive
/// substring search; the first row with a hit wins.
const SPORT_KEYWORDS: &[(&str, &[&str])] = &[
    ("NFL", &["nfl", "ravens", "eagles", "chiefs", "cowboys"]),
    ("NBA", &["nba", "lakers", "celtics", "warriors", "knicks"]),
    ("MLB", &["mlb", "yankees", "dodgers", "braves", "astros"]),
    ("UFC", &["ufc", "mma", "bellator"]),
    ("Tennis", &["atp", "wta", "wimbledon", "us open", "roland", "open"]),
];

/// Tag an event description with a sport, falling back to "Other" when no
/// keyword matches.
pub fn detect_sport(event: &str) -> &'static str {
    let haystack = event.to_lowercase();
    for (tag, keywords) in SPORT_KEYWORDS {
        if keywords.iter().any(|kw| haystack.contains(kw)) {
            return tag;
        }
    }
    "Other"
}

/// Mask an email-style handle for public display ("use****@mail.com").
/// Missing or empty input masks to "anon".
pub fn mask_handle(email: Option<&str>) -> String {
    let Some(email) = email.filter(|e| !e.is_empty()) else {
        return "anon".to_string();
    };
    let (name, domain) = email.split_once('@').unwrap_or((email, ""));
    let name = if name.is_empty() { "user" } else { name };
    let domain = if domain.is_empty() { "mail.com" } else { domain };
    let prefix: String = name.chars().take(3).collect();
    format!("{prefix}****@{domain}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_team_keyword() {
        assert_eq!(detect_sport("Cowboys vs Giants total 44.5"), "NFL");
        assert_eq!(detect_sport("Lakers moneyline"), "NBA");
        assert_eq!(detect_sport("Yankees -1.5"), "MLB");
        assert_eq!(detect_sport("UFC 300 main event"), "UFC");
        assert_eq!(detect_sport("Wimbledon final"), "Tennis");
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert_eq!(detect_sport("COWBOYS @ EAGLES"), "NFL");
    }

    #[test]
    fn unknown_events_fall_back_to_other() {
        assert_eq!(detect_sport("table tennis exhibition"), "Other");
        assert_eq!(detect_sport(""), "Other");
    }

    #[test]
    fn first_table_row_wins_on_overlap() {
        // "open" is a Tennis keyword but NFL is checked first
        assert_eq!(detect_sport("nfl season opener, lines open"), "NFL");
    }

    #[test]
    fn masks_handles() {
        assert_eq!(mask_handle(Some("user@example.com")), "use****@example.com");
        assert_eq!(mask_handle(Some("ab@x.io")), "ab****@x.io");
        assert_eq!(mask_handle(Some("nodomain")), "nod****@mail.com");
        assert_eq!(mask_handle(None), "anon");
        assert_eq!(mask_handle(Some("")), "anon");
    }
}
