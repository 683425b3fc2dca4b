//! Word lists and initials derived from raw text

#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::tones::strip_tones;

/// Tone-stripped, lowercased form of `text`.
pub fn normalize(text: &str) -> String {
    strip_tones(text).to_lowercase()
}

/// Split normalized text on single spaces.
///
/// Runs of spaces produce empty words; callers rely on that, so it is not
/// collapsed. Empty input yields no words at all.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    normalize(text).split(' ').map(str::to_string).collect()
}

/// First letter of every word, e.g. "Nguyễn Văn An" -> "nva".
pub fn initials(text: &str) -> String {
    initials_of(&tokenize(text))
}

/// Empty words contribute nothing.
fn initials_of(words: &[String]) -> String {
    words.iter().filter_map(|w| w.chars().next()).collect()
}

/// Everything the matcher derives from one candidate text
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextProfile {
    pub normalized: String,
    pub words: Vec<String>,
    pub initials: String,
}

impl TextProfile {
    pub fn new(text: &str) -> Self {
        let words = tokenize(text);
        TextProfile {
            normalized: normalize(text),
            initials: initials_of(&words),
            words,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl TextProfile {
    fn __repr__(&self) -> String {
        format!("TextProfile(normalized='{}', initials='{}', words={})",
                self.normalized, self.initials, self.words.len())
    }
}

// ============= Python Bindings =============

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "tokenize", signature = (text=None))]
pub fn py_tokenize(text: Option<&str>) -> Vec<String> {
    tokenize(text.unwrap_or_default())
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "initials", signature = (text=None))]
pub fn py_initials(text: Option<&str>) -> String {
    initials(text.unwrap_or_default())
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "profile", signature = (text=None))]
pub fn py_profile(text: Option<&str>) -> TextProfile {
    TextProfile::new(text.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_lowercase_without_tones() {
        assert_eq!(tokenize("Nguyễn Văn An"), vec!["nguyen", "van", "an"]);
    }

    #[test]
    fn empty_text_has_no_words() {
        assert!(tokenize("").is_empty());
        assert_eq!(initials(""), "");
    }

    #[test]
    fn repeated_spaces_yield_empty_words() {
        assert_eq!(tokenize("a  b"), vec!["a", "", "b"]);
        assert_eq!(tokenize(" "), vec!["", ""]);
    }

    #[test]
    fn only_spaces_are_separators() {
        assert_eq!(tokenize("Trần\tThị"), vec!["tran\tthi"]);
    }

    #[test]
    fn initials_of_full_name() {
        assert_eq!(initials("Nguyễn Văn An"), "nva");
        assert_eq!(initials("Đỗ Ánh"), "da");
    }

    // Regression: empty words from stray spaces are skipped, not replaced.
    #[test]
    fn initials_skip_empty_words() {
        assert_eq!(initials(" Nguyễn  Văn "), "nv");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn profile_collects_derived_forms() {
        let profile = TextProfile::new("Trần Thị Bình");
        assert_eq!(profile.normalized, "tran thi binh");
        assert_eq!(profile.words, vec!["tran", "thi", "binh"]);
        assert_eq!(profile.initials, "ttb");
        assert!(!profile.is_empty());
        assert!(TextProfile::new("").is_empty());
    }
}
