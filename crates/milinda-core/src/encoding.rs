//! Text encodings accepted by the analyzer.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Encoding used to decode analyzer input files.
///
/// `Utf8` is the default. `Windows1251` covers legacy Cyrillic text files
/// that were saved by older Windows editors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEncoding {
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "windows-1251")]
    Windows1251,
}

impl TextEncoding {
    /// Canonical label, as accepted by [`FromStr`].
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Windows1251 => "windows-1251",
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "windows-1251" | "cp1251" => Ok(TextEncoding::Windows1251),
            other => Err(format!(
                "unsupported encoding \"{other}\" (expected utf-8 or windows-1251)"
            )),
        }
    }
}
