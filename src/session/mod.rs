//! Ranking Sessions
//!
//! Drives an engine with answers from an [`Arbiter`], one comparison at a
//! time. Saving hands the engine's snapshot to a [`SaveStore`] and ends the
//! session; the engine itself is simply dropped.

pub mod prompt;

pub use prompt::TerminalArbiter;

use crate::error::{ApiError, SortError};
use crate::song::Song;
use crate::sort::{Comparison, SortEngine, Step};
use crate::store::{SaveRecord, SaveStore};
use tracing::{debug, info, instrument};

/// What the user wants to do with the pending comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The left song is better.
    Left,
    /// The right song is better.
    Right,
    /// Save progress and stop.
    Save,
    /// Stop without saving.
    Quit,
}

/// Source of answers.
pub trait Arbiter {
    /// `answered` counts comparisons answered so far, including any before a resume.
    fn choose(&mut self, left: &Song, right: &Song, answered: usize) -> Result<Choice, ApiError>;
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// Every song placed, best first.
    Ranked(Vec<Song>),
    /// Progress saved; `location` says where.
    Saved { location: String },
    Abandoned,
}

pub struct RankingSession<E> {
    name: String,
    engine: E,
    store: Box<dyn SaveStore>,
    answered: usize,
}

impl<E: SortEngine<Song>> RankingSession<E> {
    /// `name` labels saved records; the file store ignores it.
    pub fn new(name: impl Into<String>, engine: E, store: Box<dyn SaveStore>) -> Self {
        Self {
            name: name.into(),
            engine,
            store,
            answered: 0,
        }
    }

    /// Count comparisons answered before this session, e.g. by the session
    /// that saved the state being resumed.
    pub fn with_prior_answers(mut self, answered: usize) -> Self {
        self.answered = answered;
        self
    }

    /// Comparisons answered so far.
    pub fn answered(&self) -> usize {
        self.answered
    }

    #[instrument(
        skip(self, arbiter),
        fields(session = %self.name, algorithm = %self.engine.algorithm())
    )]
    pub fn run(&mut self, arbiter: &mut dyn Arbiter) -> Result<SessionOutcome, ApiError> {
        info!("Ranking session started");
        let mut step = self.engine.next(None)?;
        loop {
            let Comparison { left, right } = match step {
                Step::Done(ranked) => {
                    info!(answered = self.answered, songs = ranked.len(), "Ranking complete");
                    return Ok(SessionOutcome::Ranked(ranked));
                }
                Step::Compare(comparison) => comparison,
            };

            let choice = arbiter.choose(&left, &right, self.answered)?;
            debug!(left = %left, right = %right, ?choice, "Comparison answered");
            step = match choice {
                Choice::Left => self.answer(true)?,
                Choice::Right => self.answer(false)?,
                Choice::Save => {
                    let location = self.save()?;
                    return Ok(SessionOutcome::Saved { location });
                }
                Choice::Quit => {
                    info!(answered = self.answered, "Session abandoned without saving");
                    return Ok(SessionOutcome::Abandoned);
                }
            };
        }
    }

    fn answer(&mut self, left_is_better: bool) -> Result<Step<Song>, ApiError> {
        let step = self.engine.next(Some(left_is_better))?;
        self.answered += 1;
        Ok(step)
    }

    /// Save the state at the pending comparison.
    pub fn save(&self) -> Result<String, ApiError> {
        let state = self.engine.snapshot().ok_or(SortError::AlreadyFinished)?;
        let record = SaveRecord::new(self.name.clone(), state, self.answered);
        let location = self.store.save(&record)?;
        info!(location = %location, answered = self.answered, "Progress saved");
        Ok(location)
    }
}
