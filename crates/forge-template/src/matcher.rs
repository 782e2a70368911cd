//! Idea → template matching
//!
//! Two passes over the [`KeywordIndex`]:
//! 1. exact: the first identity with a trigger phrase contained in the
//!    lower-cased idea wins
//! 2. fuzzy: the highest similarity between the whole idea and any single
//!    phrase, accepted at [`FUZZY_THRESHOLD`] or above
//!
//! The fuzzy pass compares the whole idea against short phrases, so it only
//! fires for ideas that are close to a phrase verbatim.

use crate::index::KeywordIndex;
use crate::record::TemplateRecord;
use crate::store::TemplateStore;
use std::sync::Arc;
use tracing::debug;

/// Minimum similarity for a fuzzy match
pub const FUZZY_THRESHOLD: f32 = 0.60;

/// Normalized similarity in `[0, 1]`
///
/// `2·M / T` over an optimal character diff, where `M` counts matched
/// characters and `T` is the combined length. Symmetric in its arguments.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio(&a, &b)
}

#[allow(clippy::cast_precision_loss)]
fn ratio(a: &[char], b: &[char]) -> f32 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    (2 * common_chars(a, b)) as f32 / total as f32
}

/// Longest common subsequence length.
///
/// O(N·M) time with a single row sized by the shorter input, so a long idea
/// against a short phrase stays linear in the idea.
fn common_chars(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut row = vec![0_usize; short.len() + 1];
    for &x in long {
        let mut diag = 0;
        for (j, &y) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if x == y { diag + 1 } else { above.max(row[j]) };
            diag = above;
        }
    }
    row[short.len()]
}

/// How a template was selected
#[derive(Debug, Clone, PartialEq)]
pub enum MatchKind {
    /// A trigger phrase occurs in the idea
    Exact { phrase: String },
    /// Closest phrase scored at or above the threshold
    Fuzzy { phrase: String, score: f32 },
}

/// Outcome of matching one idea
#[derive(Debug, Clone)]
pub enum MatchResult {
    /// A template was selected
    Matched {
        record: Arc<TemplateRecord>,
        kind: MatchKind,
    },
    /// Nothing matched; carries the best fuzzy score seen
    NoMatch { best_score: f32 },
}

impl MatchResult {
    /// Matched identity, if any
    #[must_use]
    pub fn template_id(&self) -> Option<&str> {
        match self {
            Self::Matched { record, .. } => Some(record.id()),
            Self::NoMatch { .. } => None,
        }
    }

    /// Matched record, if any
    #[must_use]
    pub fn record(&self) -> Option<&Arc<TemplateRecord>> {
        match self {
            Self::Matched { record, .. } => Some(record),
            Self::NoMatch { .. } => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    #[inline]
    #[must_use]
    pub fn is_exact(&self) -> bool {
        matches!(
            self,
            Self::Matched {
                kind: MatchKind::Exact { .. },
                ..
            }
        )
    }
}

/// Matcher over a shared index and store
#[derive(Debug, Clone)]
pub struct TemplateMatcher {
    index: Arc<KeywordIndex>,
    store: Arc<TemplateStore>,
    threshold: f32,
}

impl TemplateMatcher {
    /// Create matcher with the default threshold
    #[inline]
    #[must_use]
    pub fn new(index: Arc<KeywordIndex>, store: Arc<TemplateStore>) -> Self {
        Self {
            index,
            store,
            threshold: FUZZY_THRESHOLD,
        }
    }

    /// With a custom fuzzy threshold
    #[inline]
    #[must_use]
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Store used for existence checks
    #[inline]
    #[must_use]
    pub fn store(&self) -> &Arc<TemplateStore> {
        &self.store
    }

    /// Resolve an idea to a template
    #[must_use]
    pub fn match_idea(&self, idea: &str) -> MatchResult {
        let idea = idea.to_lowercase();

        if let Some(result) = self.exact_match(&idea) {
            return result;
        }

        let idea: Vec<char> = idea.chars().collect();
        let mut best: Option<(&str, &str)> = None;
        let mut best_score = 0.0_f32;
        for (id, phrases) in self.index.iter() {
            for phrase in phrases {
                let phrase_chars: Vec<char> = phrase.chars().collect();
                let score = ratio(&idea, &phrase_chars);
                if score > best_score {
                    best_score = score;
                    best = Some((id, phrase));
                }
            }
        }

        if best_score >= self.threshold {
            if let Some((id, phrase)) = best {
                if let Some(record) = self.store.get(id) {
                    return MatchResult::Matched {
                        record,
                        kind: MatchKind::Fuzzy {
                            phrase: phrase.to_string(),
                            score: best_score,
                        },
                    };
                }
                debug!(template = id, "Fuzzy winner missing from store");
            }
        }

        debug!(best_score, "No template match");
        MatchResult::NoMatch { best_score }
    }

    fn exact_match(&self, idea: &str) -> Option<MatchResult> {
        for (id, phrases) in self.index.iter() {
            let Some(phrase) = phrases
                .iter()
                .find(|p| !p.is_empty() && idea.contains(p.as_str()))
            else {
                continue;
            };
            match self.store.get(id) {
                Some(record) => {
                    return Some(MatchResult::Matched {
                        record,
                        kind: MatchKind::Exact {
                            phrase: phrase.clone(),
                        },
                    });
                }
                None => debug!(template = id, "Triggered template missing from store"),
            }
        }
        None
    }
}
