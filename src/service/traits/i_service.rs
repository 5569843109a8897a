use std::ffi::OsString;
use std::path::Path;

use crate::error::Result;

// Engine service interface, the only place an engine process is started
pub trait EngineServiceTrait: Send + Sync {
    /// Runs `engine` with `args` and waits for it to finish.
    /// # Returns
    /// - `Ok(())` when the engine exited with code 0
    /// - `Error::EngineNotFound`, `Error::EngineSpawn` or `Error::EngineFailed` otherwise
    fn run(&self, engine: &Path, args: &[OsString]) -> Result<()>;
}
