use log::info;

use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::Result;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionOutput, ConversionRequest};
use crate::service::arguments::{build_arguments, format_command_line};
use crate::service::config_service::ConfigService;
use crate::service::request::build_request;
use crate::service::traits::i_service::EngineServiceTrait;

pub struct ConversionFacade {
    config_service: ConfigService,
    engine_service: Box<dyn EngineServiceTrait>,
}

impl ConversionFacade {
    pub fn new(config_port: Box<dyn ConfigPort>, engine_service: Box<dyn EngineServiceTrait>) -> Self {
        let config_service = ConfigService::new(config_port);
        ConversionFacade {
            config_service,
            engine_service,
        }
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self) -> Result<ConversionOutput> {
        let config = self.config_service.get_config()?;
        let request = build_request(&config)?;
        self.dispatch(request, &config)
    }
}

impl ConversionFacade {
    /// Hands `request` to the engine; the request is consumed here.
    fn dispatch(&self, request: ConversionRequest, config: &AppConfig) -> Result<ConversionOutput> {
        let args = build_arguments(&request);
        let command_line = format_command_line(&config.engine, &args);

        if config.dry_run {
            info!("Dry run, not starting the engine");
            println!("{}", command_line);
        } else {
            info!("Running: {}", command_line);
            self.engine_service.run(&config.engine, &args)?;
        }

        Ok(ConversionOutput {
            operation: request.operation,
            output_path: request.output_path,
            command_line,
            executed: !config.dry_run,
        })
    }
}
