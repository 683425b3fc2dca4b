//! Vietnamese tone stripping

#[cfg(feature = "python")]
use pyo3::prelude::*;

const A_LOWER: &str = "àáạảãâầấậẩẫăằắặẳẵ";
const A_UPPER: &str = "ÀÁẠẢÃÂẦẤẬẨẪĂẰẮẶẲẴ";
const E_LOWER: &str = "èéẹẻẽêềếệểễ";
const E_UPPER: &str = "ÈÉẸẺẼÊỀẾỆỂỄ";
const I_LOWER: &str = "ìíịỉĩ";
const I_UPPER: &str = "ÌÍỊỈĨ";
const O_LOWER: &str = "òóọỏõôồốộổỗơờớợởỡ";
const O_UPPER: &str = "ÒÓỌỎÕÔỒỐỘỔỖƠỜỚỢỞỠ";
const U_LOWER: &str = "ùúụủũưừứựửữ";
const U_UPPER: &str = "ÙÚỤỦŨƯỪỨỰỬỮ";
const Y_LOWER: &str = "ỳýỵỷỹ";
const Y_UPPER: &str = "ỲÝỴỶỸ";

/// Base letter for each accented group
const GROUPS: [(&str, char); 12] = [
    (A_LOWER, 'a'),
    (A_UPPER, 'A'),
    (E_LOWER, 'e'),
    (E_UPPER, 'E'),
    (I_LOWER, 'i'),
    (I_UPPER, 'I'),
    (O_LOWER, 'o'),
    (O_UPPER, 'O'),
    (U_LOWER, 'u'),
    (U_UPPER, 'U'),
    (Y_LOWER, 'y'),
    (Y_UPPER, 'Y'),
];

/// Map a single character to its unaccented Latin letter.
///
/// Characters outside the Vietnamese tone table are returned as-is, so the
/// function is a fixed point on anything it has already produced.
pub fn strip_tone(c: char) -> char {
    // Fast path: every Vietnamese accented letter lives above ASCII.
    if c.is_ascii() {
        return c;
    }
    match c {
        'đ' => 'd',
        'Đ' => 'D',
        _ => GROUPS
            .iter()
            .find(|(group, _)| group.contains(c))
            .map(|&(_, base)| base)
            .unwrap_or(c),
    }
}

/// Remove Vietnamese diacritics, preserving case. Empty input yields an empty string.
pub fn strip_tones(text: &str) -> String {
    text.chars().map(strip_tone).collect()
}

/// True when `text` contains at least one character the tone table would rewrite.
pub fn has_tones(text: &str) -> bool {
    text.chars().any(|c| strip_tone(c) != c)
}

// ============= Python Bindings =============

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "strip_tones", signature = (text=None))]
pub fn py_strip_tones(text: Option<&str>) -> String {
    strip_tones(text.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_full_name() {
        assert_eq!(strip_tones("Nguyễn Văn An"), "Nguyen Van An");
    }

    #[test]
    fn preserves_case_class() {
        assert_eq!(strip_tones("ĐẶNG THỊ Ửng"), "DANG THI Ung");
        assert_eq!(strip_tones("đặng thị ửng"), "dang thi ung");
    }

    #[test]
    fn covers_every_group() {
        assert_eq!(strip_tones(A_LOWER), "a".repeat(A_LOWER.chars().count()));
        assert_eq!(strip_tones(O_UPPER), "O".repeat(O_UPPER.chars().count()));
        assert_eq!(strip_tones("ỳýỵỷỹ ỲÝỴỶỸ"), "yyyyy YYYYY");
        assert_eq!(strip_tones("ìíịỉĩ ÙÚỤỦŨ"), "iiiii UUUUU");
    }

    #[test]
    fn table_groups_are_aligned() {
        for pair in GROUPS.chunks(2) {
            let (lower, upper) = (pair[0].0, pair[1].0);
            assert_eq!(lower.chars().count(), upper.chars().count());
            assert_eq!(lower.to_uppercase(), upper);
        }
    }

    #[test]
    fn leaves_other_text_alone() {
        assert_eq!(strip_tones(""), "");
        // û is French, not Vietnamese
        assert_eq!(strip_tones("Crème brûlée ñ 한국"), "Creme brûlee ñ 한국");
        assert_eq!(strip_tones("plain ascii 123"), "plain ascii 123");
    }

    #[test]
    fn detects_tones() {
        assert!(has_tones("Bình"));
        assert!(!has_tones("Binh"));
        assert!(!has_tones(""));
    }
}
