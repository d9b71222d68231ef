pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod export;
pub mod matcher;
pub mod normalizer;
pub mod reference;
pub mod telemetry;
pub mod web;
