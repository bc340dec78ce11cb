// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod api;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod model;

pub mod csv;
pub mod fetch;
pub mod file;
pub mod gui;
pub mod search;
pub mod sentiment;
pub mod table;
pub mod week;
