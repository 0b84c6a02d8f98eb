pub mod configuration;
pub mod dal;
pub mod domain;
pub mod services;
pub mod startup;
