use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::models::format::FormatId;

/// Appends the canonical extension of `target` when `name` has none.
fn with_extension(name: &str, target: FormatId) -> PathBuf {
    if Path::new(name).extension().is_some() {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{}{}", name, target.extension()))
    }
}

/// Derives the explicit output path for a conversion.
///
/// Empty or missing `output_dir`/`output_name` count as not given. Returns
/// `None` when neither is given, leaving the default to the engine.
pub fn resolve(
    input: &Path,
    output_dir: Option<&Path>,
    output_name: Option<&str>,
    target: FormatId,
) -> Option<PathBuf> {
    let output_dir = output_dir.filter(|dir| !dir.as_os_str().is_empty());
    let output_name = output_name.map(str::trim).filter(|name| !name.is_empty());

    match (output_dir, output_name) {
        (Some(dir), Some(name)) => Some(dir.join(with_extension(name, target))),
        (Some(dir), None) => {
            let mut file_name: OsString = input.file_stem().unwrap_or_default().to_os_string();
            file_name.push(target.extension());
            Some(dir.join(file_name))
        }
        (None, Some(name)) => Some(with_extension(name, target)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_only_uses_input_stem() {
        let path = resolve(Path::new("/in/song.txt"), Some(Path::new("/out")), None, FormatId::CsvComma);
        assert_eq!(path, Some(PathBuf::from("/out/song.csv")));
    }

    #[test]
    fn test_name_only_gets_extension() {
        let path = resolve(Path::new("/in/song.txt"), None, Some("result"), FormatId::Tr);
        assert_eq!(path, Some(PathBuf::from("result.tr")));
    }

    #[test]
    fn test_neither_given() {
        assert_eq!(resolve(Path::new("/in/song.txt"), None, None, FormatId::Huf), None);
        assert_eq!(
            resolve(Path::new("/in/song.txt"), Some(Path::new("")), Some(""), FormatId::Huf),
            None
        );
    }

    #[test]
    fn test_dir_and_name_joined() {
        let path = resolve(Path::new("/in/song.txt"), Some(Path::new("/out")), Some("lang"), FormatId::Huf);
        assert_eq!(path, Some(PathBuf::from("/out/lang.huf")));
    }

    #[test]
    fn test_existing_extension_kept() {
        let path = resolve(Path::new("/in/song.huf"), Some(Path::new("/out")), Some("lang.dat"), FormatId::Xlsx);
        assert_eq!(path, Some(PathBuf::from("/out/lang.dat")));
    }
}
