use crate::error::{Error, Result};
use crate::models::format::FormatId;
use crate::models::operation::Operation;

/// Resolves the operation converting `from` into `to`.
///
/// Both CSV variants share one operation; the delimiter travels separately.
pub fn resolve(from: FormatId, to: FormatId) -> Result<Operation> {
    use FormatId::*;

    let operation = match (from, to) {
        (Huf, Xlsx) => Operation::HufToXlsx,
        (Huf, Txt) => Operation::HufToTxt,
        (Huf, CsvComma | CsvSemicolon) => Operation::HufToCsv,
        (Huf, Tsv) => Operation::HufToTsv,
        (Huf, Tr) => Operation::HufToTr,
        (Xlsx, Huf) => Operation::XlsxToHuf,
        (Txt, Huf) => Operation::TxtToHuf,
        (CsvComma | CsvSemicolon, Huf) => Operation::CsvToHuf,
        (Tsv, Huf) => Operation::TsvToHuf,
        (Tr, Huf) => Operation::TrToHuf,
        _ => return Err(Error::UnsupportedPair { from, to }),
    };
    Ok(operation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::format::formats_accepted_as_output;

    #[test]
    fn test_identity_is_unsupported() {
        for format in FormatId::ALL {
            assert!(matches!(
                resolve(format, format),
                Err(Error::UnsupportedPair { .. })
            ));
        }
    }

    #[test]
    fn test_catalog_pairs_all_resolve() {
        for from in FormatId::ALL {
            for to in FormatId::ALL {
                let accepted = formats_accepted_as_output(from).contains(&to);
                assert_eq!(resolve(from, to).is_ok(), accepted, "{:?} -> {:?}", from, to);
            }
        }
    }

    #[test]
    fn test_csv_variants_share_operation() {
        assert_eq!(resolve(FormatId::Huf, FormatId::CsvSemicolon).unwrap().as_str(), "huf2csv");
        assert_eq!(resolve(FormatId::Huf, FormatId::CsvComma).unwrap().as_str(), "huf2csv");
        assert_eq!(resolve(FormatId::CsvSemicolon, FormatId::Huf).unwrap().as_str(), "csv2huf");
    }

    #[test]
    fn test_engine_names() {
        assert_eq!(resolve(FormatId::Huf, FormatId::Xlsx).unwrap().as_str(), "huf2xls");
        assert_eq!(resolve(FormatId::Xlsx, FormatId::Huf).unwrap().as_str(), "xlsx2huf");
        assert_eq!(resolve(FormatId::Tr, FormatId::Huf).unwrap().to_string(), "tr2huf");
    }

    #[test]
    fn test_non_huf_pair_rejected() {
        let err = resolve(FormatId::Txt, FormatId::Xlsx).unwrap_err();
        assert!(err.is_validation());
    }
}
