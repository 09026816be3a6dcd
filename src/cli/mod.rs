pub mod completions;
pub mod trace;
pub mod width;

use clap::{Parser, Subcommand};

/// curvetrace - stroke centerline tracer
#[derive(Parser, Debug)]
#[command(name = "curvetrace")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show pipeline debug output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Trace the centerline of a stroke and export it as a polyline
    Trace(trace::TraceArgs),

    /// Print the estimated stroke half-width
    Width(width::WidthArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
