pub mod cli;
pub mod commands;
pub mod frequency;
pub mod model;
pub mod readers;
pub mod util;
pub mod writers;
