pub mod agents;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod llm;
pub mod pipeline;
pub mod sandbox;
pub mod script;
