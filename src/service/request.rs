use std::path::{Path, PathBuf};

use log::{error, info};

use crate::config::ports::{AppConfig, DEFAULT_EXTRA_ARGS_FILE, DEFAULT_KEYS_FILE};
use crate::error::{Error, Result};
use crate::models::conversion::{ConversionRequest, KeyMatching};
use crate::models::format::FormatId;
use crate::service::arguments::read_extra_arguments;
use crate::service::{operation, output_path};

fn engine_dir(engine: &Path) -> &Path {
    engine.parent().unwrap_or_else(|| Path::new(""))
}

/// Path of a side file that lives next to the engine unless given explicitly.
fn side_file(explicit: Option<&Path>, engine: &Path, default_name: &str) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| engine_dir(engine).join(default_name))
}

fn keys_file(config: &AppConfig) -> PathBuf {
    side_file(config.keys_path.as_deref(), &config.engine, DEFAULT_KEYS_FILE)
}

fn validate_paths(config: &AppConfig) -> Result<()> {
    if !config.input.is_file() {
        error!("Invalid input file: {}", config.input.display());
        return Err(Error::InputNotFound(config.input.clone()));
    }
    if let Some(dir) = config.output_dir.as_deref().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.is_dir() {
            error!("Output directory does not exist: {}", dir.display());
            return Err(Error::OutputDirNotFound(dir.to_path_buf()));
        }
    }
    // the engine rejects a -keys path it cannot open
    if config.match_keys {
        let keys = keys_file(config);
        if !keys.is_file() {
            error!("Key names file does not exist: {}", keys.display());
            return Err(Error::KeysNotFound(keys));
        }
    }
    Ok(())
}

/// Validates `config` and resolves it into a conversion request.
///
/// Nothing is started here; any error means no request exists.
pub fn build_request(config: &AppConfig) -> Result<ConversionRequest> {
    validate_paths(config)?;
    let operation = operation::resolve(config.input_format, config.output_format)?;

    let output_path = output_path::resolve(
        &config.input,
        config.output_dir.as_deref(),
        config.output_name.as_deref(),
        config.output_format,
    );
    // a bare output name may still point into a missing folder
    if let Some(parent) = output_path
        .as_deref()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
    {
        if !parent.is_dir() {
            error!("Output directory does not exist: {}", parent.display());
            return Err(Error::OutputDirNotFound(parent.to_path_buf()));
        }
    }

    // comma is the engine's CSV default, only a semicolon endpoint needs the flag
    let delimiter = [config.input_format, config.output_format]
        .into_iter()
        .filter_map(FormatId::delimiter)
        .find(|d| Some(*d) == FormatId::CsvSemicolon.delimiter());
    let key_matching = if config.match_keys {
        KeyMatching::File(keys_file(config))
    } else {
        KeyMatching::Disabled
    };
    let extra_args_file = side_file(config.extra_args_file.as_deref(), &config.engine, DEFAULT_EXTRA_ARGS_FILE);

    let request = ConversionRequest {
        operation,
        input_path: config.input.clone(),
        output_path,
        game: config.game,
        delimiter,
        key_matching,
        charmap_path: config.charmap.clone(),
        write_hashes: config.write_hashes,
        legacy_code_page: config.legacy_code_page,
        show_stats: config.show_stats,
        language: config.language,
        extra_arguments: read_extra_arguments(&extra_args_file),
    };
    info!(
        "Resolved {} for {} -> {}",
        request.operation,
        config.input.display(),
        request
            .output_path
            .as_deref()
            .map_or_else(|| "(engine default)".to_string(), |p| p.display().to_string())
    );
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::format::GameVariant;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, AppConfig) {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("lang.huf");
        fs::write(&input, b"CLFB\0\0\0\0\x01\0\0\0").unwrap();
        fs::write(dir.path().join("keys.txt"), "").unwrap();
        let engine = dir.path().join("HufConverter.exe");
        let config = AppConfig::with_defaults(input, FormatId::Huf, engine);
        (dir, config)
    }

    #[test]
    fn test_defaults() {
        let (dir, config) = setup();
        let request = build_request(&config).unwrap();
        assert_eq!(request.operation.as_str(), "huf2xls");
        assert_eq!(request.output_path, None);
        assert_eq!(request.delimiter, None);
        assert_eq!(request.key_matching, KeyMatching::File(dir.path().join("keys.txt")));
        assert_eq!(request.game, GameVariant::Fm09To14);
        assert!(request.extra_arguments.is_empty());
    }

    #[test]
    fn test_semicolon_on_either_side() {
        let (_dir, mut config) = setup();
        config.output_format = FormatId::CsvSemicolon;
        assert_eq!(build_request(&config).unwrap().delimiter, Some(';'));
        config.output_format = FormatId::CsvComma;
        assert_eq!(build_request(&config).unwrap().delimiter, None);
    }

    #[test]
    fn test_tab_endpoints_leave_separator_unset() {
        let (dir, mut config) = setup();
        for format in [FormatId::Txt, FormatId::Tsv, FormatId::Tr] {
            config.output_format = format;
            assert_eq!(build_request(&config).unwrap().delimiter, None, "{}", format);
        }
        let ssv = dir.path().join("lang.csv");
        fs::write(&ssv, "Key;Text\n").unwrap();
        config.input = ssv;
        config.input_format = FormatId::CsvSemicolon;
        config.output_format = FormatId::Huf;
        assert_eq!(build_request(&config).unwrap().delimiter, Some(';'));
    }

    #[test]
    fn test_keys_disabled_and_explicit() {
        let (dir, mut config) = setup();
        let mine = dir.path().join("mine.txt");
        fs::write(&mine, "KEY\n").unwrap();
        config.match_keys = false;
        config.keys_path = Some(mine.clone());
        assert_eq!(build_request(&config).unwrap().key_matching, KeyMatching::Disabled);
        config.match_keys = true;
        assert_eq!(build_request(&config).unwrap().key_matching, KeyMatching::File(mine));
    }

    #[test]
    fn test_missing_default_keys_file() {
        let (dir, config) = setup();
        let keys = dir.path().join("keys.txt");
        fs::remove_file(&keys).unwrap();
        match build_request(&config) {
            Err(Error::KeysNotFound(path)) => assert_eq!(path, keys),
            other => panic!("expected KeysNotFound, got {:?}", other),
        }
        assert!(Error::KeysNotFound(keys).is_validation());
    }

    #[test]
    fn test_missing_explicit_keys_file() {
        let (dir, mut config) = setup();
        config.keys_path = Some(dir.path().join("mine.txt"));
        assert!(matches!(build_request(&config), Err(Error::KeysNotFound(_))));
        // disabled matching never looks at the file
        config.match_keys = false;
        assert!(build_request(&config).is_ok());
    }

    #[test]
    fn test_extra_arguments_next_to_engine() {
        let (dir, config) = setup();
        fs::write(dir.path().join("extra_args.txt"), "-silent  -stats\nnope\n").unwrap();
        let request = build_request(&config).unwrap();
        assert_eq!(request.extra_arguments, vec!["-silent", "-stats"]);
    }

    #[test]
    fn test_missing_input() {
        let (dir, mut config) = setup();
        config.input = dir.path().join("missing.huf");
        assert!(matches!(build_request(&config), Err(Error::InputNotFound(_))));
    }

    #[test]
    fn test_input_directory_rejected() {
        let (dir, mut config) = setup();
        config.input = dir.path().to_path_buf();
        assert!(matches!(build_request(&config), Err(Error::InputNotFound(_))));
    }

    #[test]
    fn test_missing_output_dir() {
        let (dir, mut config) = setup();
        config.output_dir = Some(dir.path().join("nope"));
        assert!(matches!(build_request(&config), Err(Error::OutputDirNotFound(_))));
    }

    #[test]
    fn test_output_name_with_missing_parent() {
        let (dir, mut config) = setup();
        config.output_name = Some(dir.path().join("nope/out").to_string_lossy().into_owned());
        assert!(matches!(build_request(&config), Err(Error::OutputDirNotFound(_))));
    }

    #[test]
    fn test_output_dir_resolution() {
        let (dir, mut config) = setup();
        config.output_dir = Some(dir.path().to_path_buf());
        config.output_format = FormatId::Tr;
        let request = build_request(&config).unwrap();
        assert_eq!(request.output_path, Some(dir.path().join("lang.tr")));
    }

    #[test]
    fn test_unsupported_pair() {
        let (_dir, mut config) = setup();
        config.output_format = FormatId::Huf;
        assert!(matches!(build_request(&config), Err(Error::UnsupportedPair { .. })));
    }
}
