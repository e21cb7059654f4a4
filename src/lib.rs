//! primer: introductory algorithms, statistics, string checks and a shape model
//!
//! Layers:
//! - [`domain`]: pure computations and entities
//! - [`application`]: demonstration service over [`config::Settings`]
//! - [`cli`]: argument parsing, dispatch and terminal output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
