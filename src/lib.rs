pub mod args;
pub mod assets;
pub mod commands;
pub mod error;
pub mod output;
pub mod records;
pub mod render;
pub mod tasks;
pub mod visuals;
