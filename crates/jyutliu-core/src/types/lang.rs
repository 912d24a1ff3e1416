use std::fmt;

use serde::{Deserialize, Serialize};

/// Language label assigned to a curated line.
///
/// The labels come from a lexical heuristic, not a statistical model:
/// `Yue` means "Chinese script plus at least one dialect-mask token",
/// so Cantonese written purely with characters shared with standard
/// Chinese is labeled `Zh` (a known false negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Written Cantonese (dialect mask matched).
    Yue,
    /// Standard written Chinese (CJK script, no mask token).
    Zh,
    /// English / Latin-script only.
    En,
    /// Both scripts present, or neither (punctuation, digits).
    Mixed,
}

impl Lang {
    /// All labels, in declaration order.
    pub const ALL: [Lang; 4] = [Lang::Yue, Lang::Zh, Lang::En, Lang::Mixed];

    /// The wire/store spelling of the label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yue => "yue",
            Self::Zh => "zh",
            Self::En => "en",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_display_matches_wire_format() {
        assert_eq!(Lang::Yue.to_string(), "yue");
        assert_eq!(Lang::Zh.to_string(), "zh");
        assert_eq!(Lang::En.to_string(), "en");
        assert_eq!(Lang::Mixed.to_string(), "mixed");
    }

    #[test]
    fn lang_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Lang::Yue).unwrap(), "\"yue\"");
        assert_eq!(serde_json::to_string(&Lang::Mixed).unwrap(), "\"mixed\"");
    }

    #[test]
    fn lang_deserializes_from_wire_format() {
        for lang in Lang::ALL {
            let json = serde_json::to_string(&lang).unwrap();
            let back: Lang = serde_json::from_str(&json).unwrap();
            assert_eq!(lang, back);
        }
    }

    #[test]
    fn all_covers_every_label() {
        assert_eq!(Lang::ALL.len(), 4);
    }
}
