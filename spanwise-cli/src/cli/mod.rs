//! Command-line interface for the spanwise graph toolkit.
//!
//! Every command loads a text graph file, builds it in the requested
//! representation, runs one algorithm (or the `all` sequence) and hands back
//! an [`ExecutionSummary`] that [`render_summary`] turns into text.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GraphArgs, LabelStyle, Report, RepresentationArg,
    RootedArgs, run_cli,
};
pub use render::render_summary;
