pub mod command;
pub mod controller;
pub mod runtime_config;
