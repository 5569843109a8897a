use std::path::PathBuf;

use clap::Parser;

use crate::action::interactive::process_interactive_mode;
use crate::config::config::Cli;
use crate::config::ports::{default_engine_path, default_output_format, AppConfig, ConfigPort};
use crate::error::Result;
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::ConversionOutput;
use crate::service::config_service::{detect_selection, DefaultConfigAdapter};
use crate::service::engine::EngineService;
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> Result<ConversionOutput> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> Result<ConversionOutput> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    let engine = cli.engine.clone().unwrap_or_else(default_engine_path);
    let config_port: Box<dyn ConfigPort> = if cli.is_default_config() {
        log::info!("Only an input file given, using defaults with detected format, game and language");
        Box::new(DefaultConfigAdapter::new(cli.input.clone(), engine))
    } else {
        Box::new(CliConfigAdapter::new(cli.clone(), engine))
    };

    let facade = ConversionFacade::new(config_port, Box::new(EngineService::new(cli.no_progress)));
    facade.execute_conversion()
}

// CLI config adapter
pub struct CliConfigAdapter {
    cli: Cli,
    engine: PathBuf,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli, engine: PathBuf) -> Self {
        CliConfigAdapter { cli, engine }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        let cli = &self.cli;
        let (input_format, selection) = detect_selection(&cli.input, cli.from, cli.game, cli.language)?;

        Ok(AppConfig {
            input: cli.input.clone(),
            input_format,
            output_format: cli.to.unwrap_or_else(|| default_output_format(input_format)),
            output_dir: cli.output_dir.clone(),
            output_name: cli.output_name.clone(),
            game: selection.game,
            language: selection.language,
            match_keys: !cli.no_keys,
            keys_path: cli.keys.clone(),
            charmap: cli.charmap.clone(),
            write_hashes: cli.hashes,
            legacy_code_page: cli.windows1251,
            show_stats: cli.stats,
            engine: self.engine.clone(),
            extra_args_file: cli.extra_args_file.clone(),
            dry_run: cli.dry_run,
            no_progress: cli.no_progress,
        })
    }
}
