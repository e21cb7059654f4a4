//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

/// Introductory algorithms, statistics, string checks and a shape model
#[derive(Parser, Debug)]
#[command(name = "primer")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Settings file (TOML), layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full demonstration
    Demo,

    /// Largest k with k*k <= N
    Isqrt {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Approximate pi with the Leibniz series
    Pi {
        /// Number of series terms (default: from settings)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        iterations: Option<i64>,
    },

    /// N! (exact up to 20)
    Factorial { n: u32 },

    /// Mean, standard deviation, min and max
    Stats {
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Reverse a list of integers
    Reverse {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// Check whether TEXT is a palindrome
    Palindrome { text: Option<String> },

    /// Count the vowels in TEXT
    Vowels { text: Option<String> },

    /// Describe a shape
    Shape {
        #[command(subcommand)]
        command: ShapeCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ShapeCommands {
    /// Circle of the given radius
    Circle {
        #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
        radius: f64,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Rectangle of the given width and height
    Rectangle {
        #[arg(short = 'W', long, default_value_t = 1.0, allow_negative_numbers = true)]
        width: f64,
        #[arg(short = 'H', long, default_value_t = 1.0, allow_negative_numbers = true)]
        height: f64,
        #[command(flatten)]
        style: StyleArgs,
    },
}

/// Base attributes shared by all shapes
#[derive(Args, Debug)]
pub struct StyleArgs {
    #[arg(long, default_value = "white")]
    pub color: String,
    #[arg(long)]
    pub filled: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Show global config file location
    Path,
}
