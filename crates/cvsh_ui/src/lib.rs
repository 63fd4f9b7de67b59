//! cvsh UI Library
//!
//! Character-terminal rendering for the portfolio: the box-drawn ID
//! card, palette-driven styling of the transcript, the interactive
//! read-execute-print loop and the interview-invitation form.

pub use app::App;
pub use card::CardFace;
pub use config::UiConfig;
pub use themes::StyleSet;

pub mod app;
pub mod card;
pub mod config;
pub mod themes;

use anyhow::Result;
use cvsh_core::AppContext;

/// Run the interactive session with the given context.
pub fn run_interactive(ctx: &mut AppContext, config: UiConfig) -> Result<()> {
    App::new(config).run(ctx)
}
