//! Static catalog of the formats, game layouts and languages the engine knows about.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::{Error, Result};

/// Formats the conversion engine reads or writes.
///
/// HUF is the hub: every other format converts only to or from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum FormatId {
    /// Binary translation table
    Huf,
    /// Excel workbook
    Xlsx,
    /// Unicode text, tab separated
    Txt,
    /// Comma separated values
    #[value(name = "csv", alias = "csv-comma")]
    CsvComma,
    /// Semicolon separated values
    #[value(name = "csv-semicolon", alias = "ssv")]
    CsvSemicolon,
    /// Tab separated values
    Tsv,
    /// Custom translation format, pipe separated
    Tr,
}

/// Text encoding the engine uses when writing a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputEncoding {
    Binary,
    Utf8Bom,
    Utf16LeBom,
}

impl fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputEncoding::Binary => write!(f, "binary"),
            OutputEncoding::Utf8Bom => write!(f, "UTF-8 BOM"),
            OutputEncoding::Utf16LeBom => write!(f, "UTF-16 LE BOM"),
        }
    }
}

impl FormatId {
    /// Catalog order, also used for prompts.
    pub const ALL: [FormatId; 7] = [
        FormatId::Huf,
        FormatId::Xlsx,
        FormatId::Txt,
        FormatId::CsvComma,
        FormatId::CsvSemicolon,
        FormatId::Tsv,
        FormatId::Tr,
    ];

    /// Canonical lower-case extension, including the dot.
    pub fn extension(self) -> &'static str {
        match self {
            FormatId::Huf => ".huf",
            FormatId::Xlsx => ".xlsx",
            FormatId::Txt => ".txt",
            FormatId::CsvComma | FormatId::CsvSemicolon => ".csv",
            FormatId::Tsv => ".tsv",
            FormatId::Tr => ".tr",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormatId::Huf => "Translation File (.HUF)",
            FormatId::Xlsx => "Excel Workbook (.XLSX)",
            FormatId::Txt => "Unicode Text (.TXT)",
            FormatId::CsvComma => "Comma Separated (.CSV)",
            FormatId::CsvSemicolon => "Semicolon Separated (.CSV)",
            FormatId::Tsv => "Tab Separated (.TSV)",
            FormatId::Tr => "Custom Translation (.TR)",
        }
    }

    /// Label with the encoding appended for text formats, e.g.
    /// `Unicode Text (.TXT) (UTF-16 LE BOM)`.
    pub fn output_label(self) -> String {
        match self.output_encoding() {
            OutputEncoding::Binary => self.label().to_string(),
            encoding => format!("{} ({})", self.label(), encoding),
        }
    }

    pub fn output_encoding(self) -> OutputEncoding {
        match self {
            FormatId::Huf | FormatId::Xlsx => OutputEncoding::Binary,
            FormatId::Txt => OutputEncoding::Utf16LeBom,
            FormatId::CsvComma | FormatId::CsvSemicolon | FormatId::Tsv | FormatId::Tr => {
                OutputEncoding::Utf8Bom
            }
        }
    }

    /// Column delimiter of the text formats.
    pub fn delimiter(self) -> Option<char> {
        match self {
            FormatId::Huf | FormatId::Xlsx => None,
            FormatId::Txt | FormatId::Tsv => Some('\t'),
            FormatId::CsvComma => Some(','),
            FormatId::CsvSemicolon => Some(';'),
            FormatId::Tr => Some('|'),
        }
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Formats a file of `input` format may be converted into.
pub fn formats_accepted_as_output(input: FormatId) -> Vec<FormatId> {
    match input {
        FormatId::Huf => FormatId::ALL
            .iter()
            .copied()
            .filter(|f| *f != FormatId::Huf)
            .collect(),
        _ => vec![FormatId::Huf],
    }
}

/// Binary layout family of the target game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameVariant {
    #[default]
    Fm09To14,
    Fm06To08,
    Tcm2005,
}

impl GameVariant {
    pub const ALL: [GameVariant; 3] = [
        GameVariant::Fm09To14,
        GameVariant::Fm06To08,
        GameVariant::Tcm2005,
    ];

    /// Value of the engine's `-game` flag; `None` for the engine default.
    pub fn selector(self) -> Option<&'static str> {
        match self {
            GameVariant::Fm09To14 => None,
            GameVariant::Fm06To08 => Some("fm06"),
            GameVariant::Tcm2005 => Some("tcm2005"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameVariant::Fm09To14 => "FIFA Manager 09 - FIFA Manager 14",
            GameVariant::Fm06To08 => "FIFA Manager 06 - FIFA Manager 08",
            GameVariant::Tcm2005 => "Total Club Manager 2005",
        }
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameVariant {
    type Err = Error;

    /// Accepts any single game name the engine accepts (`fm06` .. `fm14`, `tcm2005`).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "tcm2005" => Ok(GameVariant::Tcm2005),
            "fm06" | "fm07" | "fm08" => Ok(GameVariant::Fm06To08),
            "fm09" | "fm10" | "fm11" | "fm12" | "fm13" | "fm14" => Ok(GameVariant::Fm09To14),
            _ => Err(Error::InvalidGame(s.to_string())),
        }
    }
}

const LANGUAGE_NAMES: [&str; 6] = ["English", "French", "German", "Italian", "Spanish", "Polish"];

/// Language slot of a translation table, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LanguageId(u8);

impl LanguageId {
    pub const ENGLISH: LanguageId = LanguageId(1);

    pub fn new(id: u32) -> Result<Self> {
        Self::from_raw(id).ok_or(Error::InvalidLanguage(id))
    }

    /// Like [`LanguageId::new`] but for values read from untrusted file headers.
    pub fn from_raw(id: u32) -> Option<Self> {
        (1..=LANGUAGE_NAMES.len() as u32)
            .contains(&id)
            .then(|| LanguageId(id as u8))
    }

    pub fn all() -> impl Iterator<Item = LanguageId> {
        (1..=LANGUAGE_NAMES.len() as u8).map(LanguageId)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        LANGUAGE_NAMES[usize::from(self.0) - 1]
    }
}

impl Default for LanguageId {
    fn default() -> Self {
        LanguageId::ENGLISH
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LanguageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u32>() {
            return LanguageId::new(id);
        }
        LanguageId::all()
            .find(|lang| lang.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownLanguage(trimmed.to_string()))
    }
}
