//! Interactive terminal arbiter.

use crate::error::ApiError;
use crate::session::{Arbiter, Choice};
use crate::song::Song;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

const SAVE_LABEL: &str = "Save progress and quit";
const QUIT_LABEL: &str = "Quit without saving";

/// Asks on the terminal which of two songs is better.
pub struct TerminalArbiter {
    theme: ColorfulTheme,
}

impl TerminalArbiter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalArbiter {
    fn default() -> Self {
        Self::new()
    }
}

impl Arbiter for TerminalArbiter {
    fn choose(&mut self, left: &Song, right: &Song, answered: usize) -> Result<Choice, ApiError> {
        let items = menu_items(left, right);
        let picked = Select::with_theme(&self.theme)
            .with_prompt(format!(
                "Which song is better? (comparison {})",
                answered + 1
            ))
            .items(&items)
            .default(0)
            .interact_opt()?;
        Ok(choice_for(picked))
    }
}

fn menu_items(left: &Song, right: &Song) -> Vec<String> {
    vec![
        left.describe(),
        right.describe(),
        SAVE_LABEL.to_string(),
        QUIT_LABEL.to_string(),
    ]
}

/// Escape or `q` in the menu quits without saving.
fn choice_for(picked: Option<usize>) -> Choice {
    match picked {
        Some(0) => Choice::Left,
        Some(1) => Choice::Right,
        Some(2) => Choice::Save,
        _ => Choice::Quit,
    }
}
