//! fibprime library — application logic for the Fibonacci-prime CLI.

pub mod app;
pub mod completion;
pub mod config;
pub mod errors;
pub mod orchestrator;
pub mod output;
pub mod presenter;
