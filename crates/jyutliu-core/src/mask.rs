//! The Cantonese dialect mask: surface tokens diagnostic of written
//! Cantonese versus standard written Chinese.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::warn;

use crate::error::{CurateError, Result};

/// Built-in mask: particles, pronouns and set phrases that rarely occur
/// in standard written Chinese. Multi-character phrases included so the
/// mask also catches text that avoids single dialect characters.
pub const DEFAULT_YUE_TOKENS: &[&str] = &[
    "嘅", "咗", "冇", "喺", "嗰", "嚟", "啱", "咩", "噉", "咁", "哋", "俾", "喎",
    "喔", "啦", "喇", "囉", "啩", "呀", "吖", "啫", "咋", "得閒", "飲茶", "埋單",
    "唔", "嚟緊", "睇吓", "邊度", "點樣", "係唔係", "系唔系",
];

/// A compiled dialect mask. Loaded once per pipeline run, read-only
/// thereafter; matching is unordered substring membership where the
/// first hit short-circuits.
#[derive(Debug, Clone)]
pub struct DialectMask {
    tokens: Vec<String>,
    pattern: Regex,
}

impl DialectMask {
    /// Builds the built-in default mask.
    ///
    /// # Errors
    ///
    /// Returns `CurateError::MaskPattern` if the alternation fails to
    /// compile (should never happen with the static token list).
    pub fn default_mask() -> Result<Self> {
        Self::from_tokens(DEFAULT_YUE_TOKENS.iter().copied())
    }

    /// Builds a mask from explicit tokens. Blank tokens are dropped.
    ///
    /// # Errors
    ///
    /// Returns `CurateError::EmptyMask` when no usable token remains.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(Into::into)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return Err(CurateError::EmptyMask);
        }

        let alternation = tokens
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("({alternation})"))?;

        Ok(Self { tokens, pattern })
    }

    /// Loads a mask from an override file, one token per line.
    ///
    /// # Errors
    ///
    /// Returns `CurateError::Io` when the file cannot be read and
    /// `CurateError::EmptyMask` when it holds no tokens.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_tokens(content.lines())
    }

    /// Resolves the mask for a pipeline run: the override file when it
    /// exists and is usable, else the built-in default. An unusable
    /// override (unreadable, empty) is logged and ignored rather than
    /// aborting the run.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            match Self::from_file(path) {
                Ok(mask) => return Ok(mask),
                Err(err) => {
                    warn!(path = %path.display(), %err, "ignoring dialect mask override");
                }
            }
        }
        Self::default_mask()
    }

    /// Returns `true` when the line contains at least one mask token.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    /// The mask tokens, in load order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}
