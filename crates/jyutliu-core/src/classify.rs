//! Heuristic dialect classification over normalized lines.

use crate::error::Result;
use crate::mask::DialectMask;
use crate::types::Lang;

/// Returns `true` when the line contains an ASCII Latin letter.
#[must_use]
pub fn has_latin(line: &str) -> bool {
    line.bytes().any(|b| b.is_ascii_alphabetic())
}

/// Returns `true` when the line contains a CJK unified ideograph
/// (U+4E00..=U+9FFF).
#[must_use]
pub fn has_cjk(line: &str) -> bool {
    line.chars().any(|c| matches!(c, '\u{4e00}'..='\u{9fff}'))
}

/// Labels lines by script membership plus the dialect mask.
///
/// This is a lexical heuristic, not a statistical classifier: Cantonese
/// written only with characters shared with standard Chinese comes out
/// as `Zh`. Constructed once per run with a resolved mask and passed by
/// reference wherever classification happens.
#[derive(Debug, Clone)]
pub struct DialectClassifier {
    mask: DialectMask,
}

impl DialectClassifier {
    /// Creates a classifier over the given mask.
    #[must_use]
    pub fn new(mask: DialectMask) -> Self {
        Self { mask }
    }

    /// Creates a classifier over the built-in default mask.
    ///
    /// # Errors
    ///
    /// Propagates mask compilation failure (should never happen with
    /// the static token list).
    pub fn with_default_mask() -> Result<Self> {
        Ok(Self::new(DialectMask::default_mask()?))
    }

    /// Labels one line.
    ///
    /// - Latin letters and no CJK → [`Lang::En`]
    /// - CJK and no Latin → [`Lang::Yue`] when a mask token occurs,
    ///   else [`Lang::Zh`]
    /// - both scripts, or neither → [`Lang::Mixed`]
    ///
    /// Lines reaching the neither-script arm are punctuation/digit-only;
    /// the ingest stage drops empty lines before classification.
    #[must_use]
    pub fn classify(&self, line: &str) -> Lang {
        match (has_latin(line), has_cjk(line)) {
            (true, false) => Lang::En,
            (false, true) => {
                if self.mask.matches(line) {
                    Lang::Yue
                } else {
                    Lang::Zh
                }
            }
            _ => Lang::Mixed,
        }
    }

    /// The mask this classifier was built with.
    #[must_use]
    pub fn mask(&self) -> &DialectMask {
        &self.mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> DialectClassifier {
        DialectClassifier::with_default_mask().unwrap()
    }

    #[test]
    fn latin_only_is_en() {
        let c = classifier();
        assert_eq!(c.classify("Hello world"), Lang::En);
        assert_eq!(c.classify("it's 5 o'clock!"), Lang::En);
    }

    #[test]
    fn masked_cjk_is_yue() {
        let c = classifier();
        // Contains mask tokens 冇 and 嘅
        assert_eq!(c.classify("冇问题嘅 - 多谢"), Lang::Yue);
        assert_eq!(c.classify("我哋听日去"), Lang::Yue);
        assert_eq!(c.classify("今日得閒飲茶"), Lang::Yue);
    }

    #[test]
    fn unmasked_cjk_is_zh() {
        let c = classifier();
        assert_eq!(c.classify("你好吗"), Lang::Zh);
        assert_eq!(c.classify("今天天气很好"), Lang::Zh);
    }

    #[test]
    fn both_scripts_is_mixed() {
        let c = classifier();
        assert_eq!(c.classify("OK喇"), Lang::Mixed);
        assert_eq!(c.classify("用app睇"), Lang::Mixed);
    }

    #[test]
    fn neither_script_is_mixed() {
        let c = classifier();
        assert_eq!(c.classify("12345"), Lang::Mixed);
        assert_eq!(c.classify("!!!"), Lang::Mixed);
        assert_eq!(c.classify(""), Lang::Mixed);
    }

    #[test]
    fn script_detection_ranges() {
        assert!(has_latin("abc"));
        assert!(!has_latin("你好"));
        assert!(!has_latin("123"));

        assert!(has_cjk("你"));
        assert!(!has_cjk("abc"));
        // Katakana is outside the unified-ideograph range
        assert!(!has_cjk("カタカナ"));
    }

    #[test]
    fn override_mask_changes_labels() {
        let mask = DialectMask::from_tokens(["天气"]).unwrap();
        let c = DialectClassifier::new(mask);
        assert_eq!(c.classify("今天天气很好"), Lang::Yue);
        assert_eq!(c.classify("冇问题"), Lang::Zh);
    }
}
