pub mod error;

pub mod models {
    pub mod conversion;
    pub mod format;
    pub mod operation;
    pub mod selection;
}

pub mod service {
    pub mod arguments;
    pub mod config_service;
    pub mod engine;
    pub mod operation;
    pub mod output_path;
    pub mod request;
    pub mod sniffer;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod facade {
    pub mod conversion_facade;
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod utils {
    pub mod file;
    pub mod utils;
}

pub use error::{Error, Result};
