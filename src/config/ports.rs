use std::path::PathBuf;

use crate::error::Result;
use crate::models::format::{FormatId, GameVariant, LanguageId};

pub const DEFAULT_ENGINE_NAME: &str = "HufConverter.exe";
pub const DEFAULT_KEYS_FILE: &str = "keys.txt";
pub const DEFAULT_EXTRA_ARGS_FILE: &str = "extra_args.txt";

// Options for one conversion attempt, explicit choices already merged with detection
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: PathBuf,
    pub input_format: FormatId,
    pub output_format: FormatId,
    pub output_dir: Option<PathBuf>,
    pub output_name: Option<String>,
    pub game: GameVariant,
    pub language: LanguageId,
    pub match_keys: bool,
    /// `None` means the default keys file next to the engine.
    pub keys_path: Option<PathBuf>,
    pub charmap: Option<PathBuf>,
    pub write_hashes: bool,
    pub legacy_code_page: bool,
    pub show_stats: bool,
    pub engine: PathBuf,
    /// `None` means the default extra-arguments file next to the engine.
    pub extra_args_file: Option<PathBuf>,
    pub dry_run: bool,
    pub no_progress: bool,
}

impl AppConfig {
    /// Options with every default applied, for converting `input` from `input_format`.
    pub fn with_defaults(input: PathBuf, input_format: FormatId, engine: PathBuf) -> Self {
        AppConfig {
            input,
            input_format,
            output_format: default_output_format(input_format),
            output_dir: None,
            output_name: None,
            game: GameVariant::default(),
            language: LanguageId::default(),
            match_keys: true,
            keys_path: None,
            charmap: None,
            write_hashes: false,
            legacy_code_page: false,
            show_stats: false,
            engine,
            extra_args_file: None,
            dry_run: false,
            no_progress: false,
        }
    }
}

/// HUF converts to a workbook by default; everything else converts back to HUF.
pub fn default_output_format(input_format: FormatId) -> FormatId {
    match input_format {
        FormatId::Huf => FormatId::Xlsx,
        _ => FormatId::Huf,
    }
}

/// `HufConverter.exe` next to the running executable, or in the working directory.
pub fn default_engine_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_ENGINE_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENGINE_NAME))
}

// Port for the source of the options
pub trait ConfigPort {
    fn get_config(&self) -> Result<AppConfig>;
}
