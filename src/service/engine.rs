use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use log::{error, info};

use crate::error::{Error, Result};
use crate::service::traits::i_service::EngineServiceTrait;
use crate::utils::utils::ProgressManager;

/// Runs the conversion engine as a child process.
pub struct EngineService {
    no_progress: bool,
}

impl EngineService {
    pub fn new(no_progress: bool) -> Self {
        EngineService { no_progress }
    }
}

impl EngineServiceTrait for EngineService {
    fn run(&self, engine: &Path, args: &[OsString]) -> Result<()> {
        if !engine.is_file() {
            error!("Conversion engine not found: {}", engine.display());
            return Err(Error::EngineNotFound(engine.to_path_buf()));
        }

        let progress = ProgressManager::new("Converting...", self.no_progress);
        let status = Command::new(engine).args(args).status();
        let status = match status {
            Ok(status) => status,
            Err(e) => {
                progress.finish(false);
                error!("Unable to start {}: {}", engine.display(), e);
                return Err(Error::EngineSpawn(e));
            }
        };

        progress.finish(status.success());
        if status.success() {
            info!("Engine finished successfully");
            Ok(())
        } else {
            error!("Engine exited with {}", status);
            Err(Error::EngineFailed {
                code: status.code(),
            })
        }
    }
}
