//! Case-insensitive keyword search over check-in notes

use crate::core::types::Entry;

/// Keywords to look for; matching is a case-folded substring OR
#[derive(Debug, Clone)]
pub(crate) struct KeywordQuery {
    keywords: Vec<String>,
    folded: Vec<String>,
}

impl KeywordQuery {
    /// Blank keywords are dropped, they would match every note
    pub(crate) fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().to_string())
            .filter(|k| !k.trim().is_empty())
            .collect();
        let folded = keywords.iter().map(|k| k.to_lowercase()).collect();
        KeywordQuery { keywords, folded }
    }

    pub(crate) fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub(crate) fn matches(&self, entry: &Entry) -> bool {
        let Some(notes) = entry.notes_text() else {
            return false;
        };
        let notes = notes.to_lowercase();
        self.folded.iter().any(|k| notes.contains(k.as_str()))
    }
}

/// Matching entries in log order
pub(crate) fn search<'a>(entries: &'a [Entry], query: &KeywordQuery) -> Vec<&'a Entry> {
    entries.iter().filter(|e| query.matches(e)).collect()
}
