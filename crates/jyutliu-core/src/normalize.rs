//! Line normalization applied to every raw line before classification.

/// Characters stripped from the head of a line: list bullets and the
/// dash variants subtitle rips use for dialogue markers.
const LEADING_BULLETS: &[char] = &['-', '–', '—', '·', '•', '*'];

/// Collapses whitespace runs to a single space, trims, and strips a
/// leading run of bullet/dash punctuation (spaces inside that run are
/// consumed with it, which keeps the function idempotent).
///
/// Total over all inputs; the empty string maps to itself.
///
/// # Examples
/// ```
/// use jyutliu_core::normalize::normalize;
///
/// assert_eq!(normalize("  你好   吗  "), "你好 吗");
/// assert_eq!(normalize("- – 多谢"), "多谢");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_start_matches(|c: char| c == ' ' || LEADING_BULLETS.contains(&c))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("a  b\t\tc\nd"), "a b c d");
        assert_eq!(normalize("  leading and trailing  "), "leading and trailing");
    }

    #[test]
    fn handles_fullwidth_space() {
        // U+3000 ideographic space is whitespace too
        assert_eq!(normalize("你好\u{3000}吗"), "你好 吗");
    }

    #[test]
    fn strips_leading_bullets() {
        assert_eq!(normalize("- hello"), "hello");
        assert_eq!(normalize("•多谢"), "多谢");
        assert_eq!(normalize("—— 冇问题"), "冇问题");
        assert_eq!(normalize("* item"), "item");
    }

    #[test]
    fn strips_interleaved_bullet_runs() {
        // Spaces inside the leading run are part of it
        assert_eq!(normalize("- - hello"), "hello");
        assert_eq!(normalize(" · • 你好"), "你好");
    }

    #[test]
    fn keeps_interior_dashes() {
        assert_eq!(normalize("冇问题嘅 - 多谢"), "冇问题嘅 - 多谢");
        assert_eq!(normalize("a-b"), "a-b");
    }

    #[test]
    fn total_on_degenerate_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("---"), "");
        assert_eq!(normalize("- • –"), "");
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "",
            "   ",
            "hello world",
            "  你好   吗  ",
            "- - hello",
            "· • 多谢",
            "冇问题嘅 - 多谢",
            "*bullet*",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
