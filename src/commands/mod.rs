pub mod config;
pub mod escape;
pub mod shade;
