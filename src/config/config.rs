use std::path::PathBuf;

use clap::Parser;

use crate::models::format::{FormatId, GameVariant, LanguageId};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "huf_converter",
    about = "Convert FIFA Manager / Total Club Manager translation files (.HUF) to and from XLSX, TXT, CSV, TSV and TR",
    long_about = "Front-end for HufConverter.exe. Detects the input format, game and language from the input file, \
resolves the conversion and runs the engine.\nRun without arguments for interactive mode; pass only an input file to use the defaults \
(HUF -> XLSX, anything else -> HUF, key matching on)."
)]
pub struct Cli {
    /// Input file (.huf, .xlsx, .txt, .csv, .tsv, .tr)
    pub input: PathBuf,
    /// Input format, detected from the file when omitted
    #[arg(long, value_enum)]
    pub from: Option<FormatId>,
    /// Output format; HUF input defaults to xlsx, other inputs to huf
    #[arg(long, value_enum)]
    pub to: Option<FormatId>,
    /// Game (fm06..fm14, tcm2005), detected from HUF headers when omitted
    #[arg(short, long)]
    pub game: Option<GameVariant>,
    /// Language id 1-6 or name (English, French, German, Italian, Spanish, Polish)
    #[arg(short, long)]
    pub language: Option<LanguageId>,
    /// Output directory, must already exist
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// Output file name; the format's extension is appended when missing
    #[arg(short = 'o', long)]
    pub output_name: Option<String>,
    /// Disable key name matching
    #[arg(long, default_value_t = false, conflicts_with = "keys")]
    pub no_keys: bool,
    /// Key names file (defaults to keys.txt next to the engine)
    #[arg(short, long)]
    pub keys: Option<PathBuf>,
    /// Character map file
    #[arg(long)]
    pub charmap: Option<PathBuf>,
    /// Write string hashes as an extra column
    #[arg(long, default_value_t = false)]
    pub hashes: bool,
    /// Write text with the Windows-1251 code page
    #[arg(long, default_value_t = false)]
    pub windows1251: bool,
    /// Ask the engine to report key matching statistics
    #[arg(long, default_value_t = false)]
    pub stats: bool,
    /// Path to HufConverter.exe (defaults to the one next to this program)
    #[arg(long)]
    pub engine: Option<PathBuf>,
    /// File whose first line is appended to the engine arguments
    #[arg(long)]
    pub extra_args_file: Option<PathBuf>,
    /// Print the engine command instead of running it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}

impl Cli {
    /// True when nothing but the input (and ambient options) was given.
    pub fn is_default_config(&self) -> bool {
        self.from.is_none()
            && self.to.is_none()
            && self.game.is_none()
            && self.language.is_none()
            && self.output_dir.is_none()
            && self.output_name.is_none()
            && !self.no_keys
            && self.keys.is_none()
            && self.charmap.is_none()
            && !self.hashes
            && !self.windows1251
            && !self.stats
            && self.extra_args_file.is_none()
            && !self.dry_run
            && !self.no_progress
    }
}
