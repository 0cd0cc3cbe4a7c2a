//! Keyword search listing

use std::fmt::Write;

use crate::consts::SEARCH_DISPLAY_LIMIT;
use crate::core::{Entry, KeywordQuery};
use crate::output::format::{format_timestamp, light_rule};
use crate::utils::Timezone;

fn display_goal(entry: &Entry) -> &str {
    match entry.goal.as_deref() {
        Some(goal) if !goal.is_empty() => goal,
        _ => "N/A",
    }
}

/// Matching check-ins, the first 20 in full
pub(crate) fn render_matches(query: &KeywordQuery, matches: &[&Entry], timezone: Timezone) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", light_rule());
    let _ = writeln!(out, "ENTRIES WITH KEYWORDS: {}", query.keywords().join(", "));
    let _ = writeln!(out, "{}", light_rule());

    if matches.is_empty() {
        let _ = writeln!(out, "No matches found.");
    } else {
        for entry in matches.iter().take(SEARCH_DISPLAY_LIMIT) {
            out.push('\n');
            let _ = writeln!(
                out,
                "{}: {}",
                format_timestamp(timezone.apply(entry.timestamp)),
                entry.status
            );
            let _ = writeln!(out, "  Goal: {}", display_goal(entry));
            let _ = writeln!(out, "  Note: {}", entry.notes.as_deref().unwrap_or("N/A"));
        }
        if matches.len() > SEARCH_DISPLAY_LIMIT {
            out.push('\n');
            let _ = writeln!(out, "... and {} more", matches.len() - SEARCH_DISPLAY_LIMIT);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn entry(notes: &str, goal: Option<&str>) -> Entry {
        Entry {
            timestamp: DateTime::parse_from_rfc3339("2025-03-01T09:15:00Z").unwrap(),
            status: "On Task".to_string(),
            goal: goal.map(String::from),
            notes: Some(notes.to_string()),
        }
    }

    #[test]
    fn lists_matching_entry() {
        let e = entry("stuck on bug", Some("Fix parser"));
        let query = KeywordQuery::new(["bug"]);
        let out = render_matches(&query, &[&e], Timezone::Recorded);
        let expected = format!(
            "{dash}\nENTRIES WITH KEYWORDS: bug\n{dash}\n\n\
             2025-03-01 09:15:00+00:00: On Task\n  Goal: Fix parser\n  Note: stuck on bug\n",
            dash = "-".repeat(60)
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn reports_no_matches() {
        let query = KeywordQuery::new(["missing", "gone"]);
        let out = render_matches(&query, &[], Timezone::Recorded);
        assert!(out.contains("ENTRIES WITH KEYWORDS: missing, gone\n"));
        assert!(out.ends_with("No matches found.\n"));
    }

    #[test]
    fn missing_goal_shows_na() {
        let e = entry("bug", None);
        let out = render_matches(&KeywordQuery::new(["bug"]), &[&e], Timezone::Recorded);
        assert!(out.contains("  Goal: N/A\n"));
    }

    #[test]
    fn caps_listing_at_twenty() {
        let entries: Vec<Entry> = (0..23).map(|_| entry("bug", None)).collect();
        let refs: Vec<&Entry> = entries.iter().collect();
        let out = render_matches(&KeywordQuery::new(["bug"]), &refs, Timezone::Recorded);
        assert_eq!(out.matches("  Note: bug").count(), 20);
        assert!(out.ends_with("... and 3 more\n"));
    }
}
