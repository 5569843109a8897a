use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Reads at most `len` bytes from the start of the file.
pub fn read_prefix(file_path: &Path, len: usize) -> io::Result<Vec<u8>> {
    let file = File::open(file_path)?;
    let mut buffer = Vec::with_capacity(len);
    file.take(len as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Opens a UTF-8 text file for line-by-line reading.
pub fn open_text(file_path: &Path) -> io::Result<BufReader<File>> {
    Ok(BufReader::new(File::open(file_path)?))
}

/// Strips a leading byte-order mark, if any.
pub fn strip_bom(line: &str) -> &str {
    line.strip_prefix(UTF8_BOM).unwrap_or(line)
}

/// First line of a text file without its BOM, `None` for an empty file.
pub fn read_first_line(file_path: &Path) -> io::Result<Option<String>> {
    let mut reader = open_text(file_path)?;
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(strip_bom(line.trim_end_matches(['\r', '\n'])).to_string()))
}
