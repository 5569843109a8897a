//! Best-effort format detection from file names and contents.
//!
//! Nothing here fails: unreadable or ambiguous files fall back to the
//! previous selection (or to comma for CSV delimiters).

use std::io::BufRead;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use log::{debug, info};

use crate::models::format::{FormatId, GameVariant, LanguageId};
use crate::models::selection::Selection;
use crate::utils::file::{open_text, read_prefix, strip_bom};

/// Tag at the start of FM09-FM14 translation tables.
pub const HUF_MAGIC: &[u8; 4] = b"CLFB";

/// Bytes needed for header sniffing.
pub const HUF_HEADER_LEN: usize = 12;

/// Maps a path's extension to a format. `.csv` yields the comma variant;
/// use [`sniff_csv_delimiter`] to tell the two apart.
pub fn format_from_extension(path: &Path) -> Option<FormatId> {
    let name = path.file_name()?.to_string_lossy().to_lowercase();
    [
        FormatId::Huf,
        FormatId::Xlsx,
        FormatId::Txt,
        FormatId::CsvComma,
        FormatId::Tsv,
        FormatId::Tr,
    ]
    .into_iter()
    .find(|format| name.ends_with(format.extension()))
}

/// Delimiter choice for a single line, `None` if the line has neither
/// an unquoted comma nor an unquoted semicolon.
fn delimiter_from_line(line: &str) -> Option<FormatId> {
    let mut in_quotes = false;
    let (mut commas, mut semicolons) = (0usize, 0usize);
    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => commas += 1,
            ';' if !in_quotes => semicolons += 1,
            _ => {}
        }
    }
    if commas == 0 && semicolons == 0 {
        None
    } else if semicolons > commas {
        Some(FormatId::CsvSemicolon)
    } else {
        Some(FormatId::CsvComma)
    }
}

/// Decides the CSV variant from the first line holding an unquoted comma or semicolon.
pub fn delimiter_from_reader<R: BufRead>(reader: R) -> FormatId {
    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                debug!("CSV sniffing stopped at line {}: {}", index + 1, e);
                break;
            }
        };
        let line = if index == 0 { strip_bom(&line) } else { &line };
        if line.trim().is_empty() {
            continue;
        }
        if let Some(format) = delimiter_from_line(line) {
            return format;
        }
    }
    FormatId::CsvComma
}

pub fn sniff_csv_delimiter(path: &Path) -> FormatId {
    match open_text(path) {
        Ok(reader) => delimiter_from_reader(reader),
        Err(e) => {
            debug!("Unable to open {} for CSV sniffing: {}", path.display(), e);
            FormatId::CsvComma
        }
    }
}

/// Applies what a HUF header says about game and language to `previous`.
///
/// Headers shorter than [`HUF_HEADER_LEN`] leave the selection unchanged.
pub fn apply_huf_header(header: &[u8], previous: Selection) -> Selection {
    if header.len() < HUF_HEADER_LEN {
        return previous;
    }
    let game = if &header[0..4] == HUF_MAGIC {
        GameVariant::Fm09To14
    } else if previous.game == GameVariant::Fm09To14 {
        GameVariant::Fm06To08
    } else {
        previous.game
    };
    let language = LanguageId::from_raw(LittleEndian::read_u32(&header[8..12]))
        .unwrap_or(previous.language);
    Selection {
        game,
        language,
        ..previous
    }
}

/// Detects the format of `path` and refreshes the suggestions in `previous`.
///
/// Unrecognised extensions keep the previous input format.
pub fn detect(path: &Path, previous: &Selection) -> Selection {
    let Some(format) = format_from_extension(path) else {
        debug!("No format inferred from {}", path.display());
        return *previous;
    };
    let mut selection = Selection {
        input_format: Some(format),
        ..*previous
    };
    match format {
        FormatId::CsvComma => {
            selection.input_format = Some(sniff_csv_delimiter(path));
        }
        FormatId::Huf => match read_prefix(path, HUF_HEADER_LEN) {
            Ok(header) => selection = apply_huf_header(&header, selection),
            Err(e) => debug!("Unable to read HUF header of {}: {}", path.display(), e),
        },
        _ => {}
    }
    info!(
        "Detected {} (game: {}, language: {} {})",
        selection.input_format.map_or("unknown", FormatId::label),
        selection.game,
        selection.language,
        selection.language.name()
    );
    selection
}
