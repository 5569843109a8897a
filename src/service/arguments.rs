use std::ffi::OsString;
use std::path::Path;

use log::{debug, warn};

use crate::models::conversion::{ConversionRequest, KeyMatching};
use crate::utils::file::read_first_line;

/// Builds the engine argument list for `request`.
///
/// The operation and input always come first and the extra arguments
/// always come last, untouched.
pub fn build_arguments(request: &ConversionRequest) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        request.operation.as_str().into(),
        "-i".into(),
        request.input_path.clone().into(),
    ];

    if let Some(output) = &request.output_path {
        args.push("-o".into());
        args.push(output.clone().into());
    }

    if let Some(selector) = request.game.selector() {
        args.push("-game".into());
        args.push(selector.into());
    }

    if let Some(delimiter) = request.delimiter {
        args.push("-separator".into());
        args.push(delimiter.to_string().into());
    }

    args.push("-keys".into());
    match &request.key_matching {
        KeyMatching::Disabled => args.push("none".into()),
        KeyMatching::File(path) => args.push(path.clone().into()),
    }

    if let Some(charmap) = &request.charmap_path {
        args.push("-charmap".into());
        args.push(charmap.clone().into());
    }

    for (enabled, flag) in [
        (request.write_hashes, "-hashes"),
        (request.legacy_code_page, "-windows1251"),
        (request.show_stats, "-stats"),
    ] {
        if enabled {
            args.push(flag.into());
        }
    }

    args.push("-language".into());
    args.push(request.language.to_string().into());

    args.extend(request.extra_arguments.iter().map(OsString::from));
    args
}

/// Tokens from the first line of the extra-arguments file.
///
/// Split on whitespace with no quoting. A missing file yields nothing.
pub fn read_extra_arguments(path: &Path) -> Vec<String> {
    if !path.is_file() {
        debug!("No extra arguments file at {}", path.display());
        return Vec::new();
    }
    match read_first_line(path) {
        Ok(line) => line
            .map(|line| line.split_whitespace().map(String::from).collect())
            .unwrap_or_default(),
        Err(e) => {
            warn!("Ignoring unreadable extra arguments file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

const SHELL_METACHARS: &[char] = &[';', '&', '|', '<', '>', '(', ')', '$', '`', '"', '\''];

fn quote_argument(arg: &str) -> String {
    if !arg.is_empty() && !arg.contains(|c: char| c.is_whitespace() || SHELL_METACHARS.contains(&c)) {
        return arg.to_string();
    }
    // backslashes stay literal so Windows paths survive
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if matches!(c, '"' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Renders `program` and `args` as one line for logs and dry runs.
///
/// Arguments a shell would split or interpret are double-quoted, so the
/// line can be pasted back into a terminal.
pub fn format_command_line(program: &Path, args: &[OsString]) -> String {
    std::iter::once(program.as_os_str())
        .chain(args.iter().map(OsString::as_os_str))
        .map(|arg| quote_argument(&arg.to_string_lossy()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::format::{GameVariant, LanguageId};
    use crate::models::operation::Operation;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn semicolon_request() -> ConversionRequest {
        ConversionRequest {
            operation: Operation::HufToCsv,
            input_path: PathBuf::from("/in/lang.huf"),
            output_path: None,
            game: GameVariant::Fm09To14,
            delimiter: Some(';'),
            key_matching: KeyMatching::Disabled,
            charmap_path: None,
            write_hashes: true,
            legacy_code_page: false,
            show_stats: false,
            language: LanguageId::new(2).unwrap(),
            extra_arguments: Vec::new(),
        }
    }

    fn contains_pair(args: &[OsString], flag: &str, value: &str) -> bool {
        args.windows(2).any(|w| w[0] == flag && w[1] == value)
    }

    #[test]
    fn test_semicolon_csv_request() {
        let args = build_arguments(&semicolon_request());
        assert_eq!(args[0], "huf2csv");
        assert_eq!(args[1], "-i");
        assert_eq!(args[2], "/in/lang.huf");
        assert!(contains_pair(&args, "-separator", ";"));
        assert!(contains_pair(&args, "-keys", "none"));
        assert!(contains_pair(&args, "-language", "2"));
        assert!(args.iter().any(|a| a == "-hashes"));
        for absent in ["-charmap", "-windows1251", "-stats", "-o", "-game"] {
            assert!(!args.iter().any(|a| a == absent), "unexpected {}", absent);
        }
    }

    #[test]
    fn test_all_options() {
        let request = ConversionRequest {
            operation: Operation::XlsxToHuf,
            output_path: Some(PathBuf::from("/out/lang.huf")),
            game: GameVariant::Tcm2005,
            delimiter: None,
            key_matching: KeyMatching::File(PathBuf::from("keys.txt")),
            charmap_path: Some(PathBuf::from("charmap.txt")),
            legacy_code_page: true,
            show_stats: true,
            extra_arguments: vec!["-silent".to_string(), "-x".to_string()],
            ..semicolon_request()
        };
        let args = build_arguments(&request);
        assert!(contains_pair(&args, "-o", "/out/lang.huf"));
        assert!(contains_pair(&args, "-game", "tcm2005"));
        assert!(contains_pair(&args, "-keys", "keys.txt"));
        assert!(contains_pair(&args, "-charmap", "charmap.txt"));
        assert!(args.iter().any(|a| a == "-windows1251"));
        assert!(args.iter().any(|a| a == "-stats"));
        assert!(!args.iter().any(|a| a == "-separator"));
        assert_eq!(&args[args.len() - 2..], ["-silent", "-x"]);
    }

    #[test]
    fn test_fm06_selector() {
        let request = ConversionRequest {
            game: GameVariant::Fm06To08,
            ..semicolon_request()
        };
        assert!(contains_pair(&build_arguments(&request), "-game", "fm06"));
    }

    #[test]
    fn test_building_is_idempotent() {
        let request = semicolon_request();
        assert_eq!(build_arguments(&request), build_arguments(&request.clone()));
    }

    #[test]
    fn test_extra_arguments_first_line_only() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "  -stats   \"quoted arg\"\t-x").unwrap();
        writeln!(file, "-ignored").unwrap();
        assert_eq!(
            read_extra_arguments(file.path()),
            vec!["-stats", "\"quoted", "arg\"", "-x"]
        );
    }

    #[test]
    fn test_missing_extra_arguments_file() {
        assert!(read_extra_arguments(Path::new("/no/such/extra_args.txt")).is_empty());
    }

    #[test]
    fn test_format_command_line_quotes_spaces() {
        let args = vec![OsString::from("huf2xls"), OsString::from("-i"), OsString::from("my file.huf")];
        assert_eq!(
            format_command_line(Path::new("HufConverter.exe"), &args),
            "HufConverter.exe huf2xls -i \"my file.huf\""
        );
    }

    #[test]
    fn test_format_command_line_quotes_shell_metacharacters() {
        let args = build_arguments(&ConversionRequest {
            input_path: PathBuf::from("a&b.huf"),
            ..semicolon_request()
        });
        let line = format_command_line(Path::new("HufConverter.exe"), &args);
        assert!(line.starts_with("HufConverter.exe huf2csv -i \"a&b.huf\" "), "{}", line);
        assert!(line.contains(" -separator \";\" "), "{}", line);
        assert!(line.contains(" -keys none "), "{}", line);
    }

    #[test]
    fn test_quote_argument_escapes() {
        assert_eq!(quote_argument(""), "\"\"");
        assert_eq!(quote_argument(r"C:\HUF\lang.huf"), r"C:\HUF\lang.huf");
        assert_eq!(quote_argument(r"C:\My Files\x.huf"), r#""C:\My Files\x.huf""#);
        assert_eq!(quote_argument("say \"hi\" $HOME"), r#""say \"hi\" \$HOME""#);
    }
}
