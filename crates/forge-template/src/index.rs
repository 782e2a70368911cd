//! Keyword index
//!
//! Identity → trigger phrases, in a fixed insertion order. The order is the
//! tie-break contract of the matcher: when an idea contains triggers of two
//! templates, the identity inserted first wins. That choice is arbitrary but
//! stable across runs and platforms.

use indexmap::IndexMap;

/// Ordered identity → trigger phrase mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordIndex {
    entries: IndexMap<String, Vec<String>>,
}

impl KeywordIndex {
    /// Create empty index
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Build from (identity, phrases) pairs, keeping their order
    ///
    /// A repeated identity keeps its first position and takes the later
    /// phrases. Phrases are stored lower-cased.
    #[must_use]
    pub fn from_pairs<I, K, P, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .map(|(id, phrases)| {
                let phrases = phrases
                    .into_iter()
                    .map(|p| p.as_ref().to_lowercase())
                    .collect();
                (id.into(), phrases)
            })
            .collect();
        Self { entries }
    }

    /// Iterate entries in tie-break order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(id, phrases)| (id.as_str(), phrases.as_slice()))
    }

    /// Trigger phrases of one identity
    #[must_use]
    pub fn phrases(&self, id: &str) -> Option<&[String]> {
        self.entries.get(id).map(Vec::as_slice)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeywordIndex {
    fn default() -> Self {
        Self::from_pairs([
            ("youtube", vec!["youtube", "video", "transcript", "summarize video", "video summary"]),
            ("invoice", vec!["invoice", "bill", "receipt", "billing", "payment tracker"]),
            ("scraper", vec!["scrape", "scraper", "web scraping", "extract data", "crawl"]),
            ("todo", vec!["todo", "task", "to-do", "task manager", "checklist"]),
            ("url_shortener", vec!["url", "link", "shortener", "shorten", "tiny url"]),
            ("recipe", vec!["recipe", "cooking", "food", "ingredients", "meal"]),
            ("expense", vec!["expense", "budget", "spending", "finance", "money tracker"]),
            ("notes", vec!["notes", "note-taking", "notebook", "markdown", "memo"]),
            ("weather", vec!["weather", "forecast", "temperature", "climate"]),
            ("quiz", vec!["quiz", "trivia", "questions", "test", "exam"]),
        ])
    }
}
