//! Push-and-deploy pipeline

pub mod command;
pub mod executor;
pub mod fsm;
pub mod parse;
pub mod runner;
