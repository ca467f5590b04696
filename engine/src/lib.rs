// Engine library root
// This file declares the modules for the engine crate.

pub mod config;
pub mod data;
pub mod edits;
pub mod error;
pub mod pipeline;
pub mod report;
