use std::path::{Path, PathBuf};

use dialoguer::{Confirm, Input, Select};

use crate::config::ports::{default_engine_path, AppConfig, ConfigPort};
use crate::error::{Error, Result};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::ConversionOutput;
use crate::models::format::{formats_accepted_as_output, FormatId, GameVariant, LanguageId};
use crate::service::config_service::{detect_selection, DefaultConfigAdapter};
use crate::service::engine::EngineService;
use crate::utils::utils::setup_logging;

pub fn process_interactive_mode() -> Result<ConversionOutput> {
    println!("=== HUF Converter interactive mode ===");
    setup_logging("info");
    let input = get_input_path()?;
    let engine = default_engine_path();
    let use_default_config = get_default_config_option()?;

    let config_port: Box<dyn ConfigPort> = if use_default_config {
        println!("Using defaults: detected format, game and language, key matching on");
        Box::new(DefaultConfigAdapter::new(input, engine))
    } else {
        Box::new(InteractiveConfigAdapter::new(input, engine))
    };

    let facade = ConversionFacade::new(config_port, Box::new(EngineService::new(false)));
    facade.execute_conversion()
}

pub fn get_default_config_option() -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt("Use the default options? (only the input file is needed)")
        .default(true)
        .interact()?)
}

pub fn get_input_path() -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt("Input file (.huf, .xlsx, .txt, .csv, .tsv, .tr)")
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if Path::new(input.trim()).is_file() {
                Ok(())
            } else {
                Err(format!("'{}' is not a file", input))
            }
        })
        .interact_text()?;
    Ok(PathBuf::from(input.trim()))
}

fn select<T: Copy + PartialEq>(prompt: &str, choices: &[T], labels: &[String], default: T) -> Result<T> {
    let default_index = choices.iter().position(|c| *c == default).unwrap_or(0);
    let index = Select::new()
        .with_prompt(prompt)
        .items(labels)
        .default(default_index)
        .interact()?;
    choices
        .get(index)
        .copied()
        .ok_or_else(|| Error::Prompt(format!("invalid selection {}", index)))
}

fn get_optional_text(prompt: &str) -> Result<Option<String>> {
    let text: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let text = text.trim();
    Ok((!text.is_empty()).then(|| text.to_string()))
}

fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
}

// Interactive config adapter, every option prompted with the detected value as default
pub struct InteractiveConfigAdapter {
    input: PathBuf,
    engine: PathBuf,
}

impl InteractiveConfigAdapter {
    pub fn new(input: PathBuf, engine: PathBuf) -> Self {
        InteractiveConfigAdapter { input, engine }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        // the prompt can still fix an unrecognised extension
        let (detected_format, selection) = match detect_selection(&self.input, None, None, None) {
            Ok(detected) => detected,
            Err(Error::UnknownInputFormat(_)) => {
                detect_selection(&self.input, Some(FormatId::Huf), None, None)?
            }
            Err(e) => return Err(e),
        };

        let game_labels: Vec<String> = GameVariant::ALL.iter().map(|g| g.label().to_string()).collect();
        let game = select("Game", &GameVariant::ALL, &game_labels, selection.game)?;

        let input_labels: Vec<String> = FormatId::ALL.iter().map(|f| f.label().to_string()).collect();
        let input_format = select("Input file format", &FormatId::ALL, &input_labels, detected_format)?;

        let outputs = formats_accepted_as_output(input_format);
        let output_labels: Vec<String> = outputs.iter().map(|f| f.output_label()).collect();
        let output_format = select("Output file format", &outputs, &output_labels, outputs[0])?;

        let languages: Vec<LanguageId> = LanguageId::all().collect();
        let language_labels: Vec<String> = languages
            .iter()
            .map(|l| format!("{} - {}", l, l.name()))
            .collect();
        let language = select("Language", &languages, &language_labels, selection.language)?;

        let output_dir = get_optional_text("Output directory (optional)")?.map(PathBuf::from);
        let output_name = get_optional_text("Output file name (optional)")?;
        let match_keys = confirm("Match key names?", true)?;
        let keys_path = if match_keys {
            get_optional_text("Key names file (optional, keys.txt next to the engine by default)")?
                .map(PathBuf::from)
        } else {
            None
        };
        let charmap = get_optional_text("Character map file (optional)")?.map(PathBuf::from);

        Ok(AppConfig {
            input: self.input.clone(),
            input_format,
            output_format,
            output_dir,
            output_name,
            game,
            language,
            match_keys,
            keys_path,
            charmap,
            write_hashes: confirm("Write hashes?", false)?,
            legacy_code_page: confirm("Use the Windows-1251 code page?", false)?,
            show_stats: confirm("Show key matching statistics?", false)?,
            engine: self.engine.clone(),
            extra_args_file: None,
            dry_run: false,
            no_progress: false,
        })
    }
}
