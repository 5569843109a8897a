use crate::error::Result;
use crate::models::conversion::ConversionOutput;

// Facade interface, coordinates detection, request building and the engine run
pub trait ConversionFacadeTrait {
    /// Runs one conversion from the configured options.
    /// # Returns
    /// - the dispatched operation, output path and engine command line
    /// - a validation error before anything is started, or an engine error
    fn execute_conversion(&self) -> Result<ConversionOutput>;
}
