use std::fmt;

/// Conversion direction understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    HufToXlsx,
    HufToTxt,
    HufToCsv,
    HufToTsv,
    HufToTr,
    XlsxToHuf,
    TxtToHuf,
    CsvToHuf,
    TsvToHuf,
    TrToHuf,
}

impl Operation {
    /// Engine command name, e.g. `csv2huf`.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::HufToXlsx => "huf2xls",
            Operation::HufToTxt => "huf2txt",
            Operation::HufToCsv => "huf2csv",
            Operation::HufToTsv => "huf2tsv",
            Operation::HufToTr => "huf2tr",
            Operation::XlsxToHuf => "xlsx2huf",
            Operation::TxtToHuf => "txt2huf",
            Operation::CsvToHuf => "csv2huf",
            Operation::TsvToHuf => "tsv2huf",
            Operation::TrToHuf => "tr2huf",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
