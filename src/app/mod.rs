//! Application layer: command orchestration over the ports.

pub mod commands;
pub mod workspace;
