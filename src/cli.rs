//! CLI domain: parse, route, output, and presentation only.
//! Ranking itself lives in sessions and engines; route dispatches to them.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{map_error, CORRUPT_SAVE_MESSAGE};
pub use parse::{Cli, Commands, SessionCommands};
pub use presentation::{
    format_outcome, format_ranking, format_session_list, format_session_show,
    format_state_summary, state_summary_json,
};
pub use route::RunContext;
