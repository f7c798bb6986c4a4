pub mod calculator;
pub mod catalog;
pub mod configuration;
pub mod controller;
pub mod error;
pub mod helpers;
pub mod model;
pub mod server;
pub mod types;
