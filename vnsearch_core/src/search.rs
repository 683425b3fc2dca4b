//! Diacritic-insensitive matching by word fragment or initials
//!
//! A search term matches a candidate when every word of the term is found
//! either inside one of the candidate's words or inside its initials. This
//! lets "nguyen", "nva" and "van an" all find "Nguyễn Văn An".

#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::tokens::{normalize, TextProfile};

/// Tone-stripped, lowercased and trimmed search term.
pub fn normalize_term(search_term: &str) -> String {
    normalize(search_term).trim().to_string()
}

/// Decide whether `text` matches `search_term`.
///
/// An empty term matches every candidate. Otherwise an empty candidate never
/// matches, and a term that is blank after normalization matches everything else.
pub fn matches(text: &str, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    if text.is_empty() {
        return false;
    }
    TextProfile::new(text).matches_term(search_term)
}

impl TextProfile {
    /// Evaluate a raw search term against this profile.
    pub fn matches(&self, search_term: &str) -> bool {
        if search_term.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }
        self.matches_term(search_term)
    }

    fn matches_term(&self, search_term: &str) -> bool {
        let term = normalize_term(search_term);
        if term.is_empty() {
            return true;
        }
        term.split(' ').all(|part| {
            self.initials.contains(part) || self.words.iter().any(|w| w.contains(part))
        })
    }
}

// ============= Python Bindings =============

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "matches", signature = (text=None, search_term=None))]
pub fn py_matches(text: Option<&str>, search_term: Option<&str>) -> bool {
    matches(text.unwrap_or_default(), search_term.unwrap_or_default())
}
