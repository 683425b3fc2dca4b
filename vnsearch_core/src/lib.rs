//! vnsearch Core - Vietnamese-aware fuzzy search for course and user listings
//!
//! Matches text with or without diacritics, by word fragment, or by initials,
//! filters record collections on named fields, and keeps the slug <-> id
//! cache used by the front-end.

mod error;
mod filter;
mod search;
mod store;
mod tokens;
mod tones;

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub use error::{Error, Result};
pub use filter::{filter_items, FieldSelector, FieldSource};
pub use search::{matches, normalize_term};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
pub use tokens::{initials, normalize, tokenize, TextProfile};
pub use tones::{has_tones, strip_tone, strip_tones};

/// vnsearch Core Python Module
#[cfg(feature = "python")]
#[pymodule]
fn vnsearch_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Normalization
    m.add_function(wrap_pyfunction!(tones::py_strip_tones, m)?)?;
    m.add_function(wrap_pyfunction!(tokens::py_tokenize, m)?)?;
    m.add_function(wrap_pyfunction!(tokens::py_initials, m)?)?;
    m.add_function(wrap_pyfunction!(tokens::py_profile, m)?)?;

    // Matching and filtering
    m.add_function(wrap_pyfunction!(search::py_matches, m)?)?;
    m.add_function(wrap_pyfunction!(filter::py_filter_items, m)?)?;

    // Slug cache
    m.add_function(wrap_pyfunction!(store::py_slug_put, m)?)?;
    m.add_function(wrap_pyfunction!(store::py_slug_get, m)?)?;
    m.add_function(wrap_pyfunction!(store::py_slug_remove, m)?)?;
    m.add_function(wrap_pyfunction!(store::py_slug_key_for, m)?)?;

    // Register classes
    m.add_class::<tokens::TextProfile>()?;

    Ok(())
}
