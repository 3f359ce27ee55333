mod args;
mod commands;
mod controller;
mod handlers;
mod logging;
mod media;
mod presentation;

pub use args::{Cli, Commands};
pub use commands::run;
