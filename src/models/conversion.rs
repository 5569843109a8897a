use std::path::PathBuf;

use crate::models::format::{GameVariant, LanguageId};
use crate::models::operation::Operation;

/// Key-name matching requested from the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMatching {
    Disabled,
    File(PathBuf),
}

/// A fully resolved conversion, ready to be turned into engine arguments.
///
/// Built fresh for every attempt and consumed by the facade when dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub operation: Operation,
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub game: GameVariant,
    pub delimiter: Option<char>,
    pub key_matching: KeyMatching,
    pub charmap_path: Option<PathBuf>,
    pub write_hashes: bool,
    pub legacy_code_page: bool,
    pub show_stats: bool,
    pub language: LanguageId,
    pub extra_arguments: Vec<String>,
}

#[derive(Debug)]
pub struct ConversionOutput {
    pub operation: Operation,
    /// `None` when the engine picked the output location itself.
    pub output_path: Option<PathBuf>,
    /// Full engine command line, engine path first.
    pub command_line: String,
    /// Whether the engine actually ran (false for dry runs).
    pub executed: bool,
}
