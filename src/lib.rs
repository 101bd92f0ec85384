pub mod error;

pub mod service {
    pub mod config_service;
    pub mod engine;
    pub mod error_log;
    pub mod host;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
}

pub mod facade {
    pub mod conversion_facade;
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod models {
    pub mod conversion;
    pub mod engine;
}

pub mod utils {
    pub mod utils;
}
