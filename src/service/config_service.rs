use std::path::{Path, PathBuf};

use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::{Error, Result};
use crate::models::format::{FormatId, GameVariant, LanguageId};
use crate::models::selection::Selection;
use crate::service::sniffer;

// Config service, wraps whichever adapter the front-end picked
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> Result<AppConfig> {
        self.config_port.get_config()
    }
}

/// Runs detection on `input`; explicit choices, when given, win over suggestions.
pub fn detect_selection(
    input: &Path,
    input_format: Option<FormatId>,
    game: Option<GameVariant>,
    language: Option<LanguageId>,
) -> Result<(FormatId, Selection)> {
    let detected = sniffer::detect(input, &Selection::default());
    let selection = detected.overridden_by(input_format, game, language);
    let format = selection
        .input_format
        .ok_or_else(|| Error::UnknownInputFormat(input.to_path_buf()))?;
    Ok((format, selection))
}

// Default adapter: only an input path, everything else detected or defaulted
pub struct DefaultConfigAdapter {
    input: PathBuf,
    engine: PathBuf,
}

impl DefaultConfigAdapter {
    pub fn new(input: PathBuf, engine: PathBuf) -> Self {
        DefaultConfigAdapter { input, engine }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        let (format, detected) = detect_selection(&self.input, None, None, None)?;
        let mut config = AppConfig::with_defaults(self.input.clone(), format, self.engine.clone());
        config.game = detected.game;
        config.language = detected.language;
        Ok(config)
    }
}
