//! Application layer - Input handling and the interactive menu

pub mod input;
pub mod shell;

pub use input::Prompter;
pub use shell::{MenuChoice, Shell};
