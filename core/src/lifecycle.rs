use alloc::string::{String, ToString};
use core::fmt::Display;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Empty,
    Loading,
    Ready,
    Failed,
}

impl GamePhase {
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::Empty
    }
}

/// Identifies one loading cycle, so a result from an abandoned cycle can be told apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket(u32);

/// Owns the board for the whole game and drives `Empty → Loading → Ready`.
///
/// A restart goes back through `Loading`. When acquisition gives up the phase
/// becomes `Failed` until the next restart.
#[derive(Clone, Debug, PartialEq)]
pub struct GameLifecycle {
    config: BoardConfig,
    policy: RetryPolicy,
    phase: GamePhase,
    board: Option<Board>,
    failure: Option<String>,
    generation: u32,
}

impl GameLifecycle {
    pub fn new(config: BoardConfig, policy: RetryPolicy) -> Self {
        Self {
            config,
            policy,
            phase: Default::default(),
            board: None,
            failure: None,
            generation: 0,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Why the last load failed, while in `Failed`.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Whether a game was ever started.
    pub fn has_started(&self) -> bool {
        self.generation > 0
    }

    /// Drops the current board and enters `Loading`.
    pub fn begin_loading(&mut self) -> LoadTicket {
        self.board = None;
        self.failure = None;
        self.phase = GamePhase::Loading;
        self.generation = self.generation.wrapping_add(1);
        log::debug!("loading board #{}", self.generation);
        LoadTicket(self.generation)
    }

    /// Stores the outcome of the cycle started by `ticket`.
    ///
    /// Returns `false` and changes nothing if a newer cycle has begun since.
    pub fn finish_loading<E: Display>(
        &mut self,
        ticket: LoadTicket,
        result: AcquireResult<Board, E>,
    ) -> bool {
        if ticket.0 != self.generation || !self.phase.is_loading() {
            log::debug!("discarding result of stale load #{}", ticket.0);
            return false;
        }

        match result {
            Ok(board) => {
                self.board = Some(board);
                self.phase = GamePhase::Ready;
            }
            Err(err) => {
                log::error!("could not load a board: {}", err);
                self.failure = Some(err.to_string());
                self.phase = GamePhase::Failed;
            }
        }
        true
    }

    /// Runs a whole loading cycle against `source`.
    pub async fn start_game<S>(&mut self, source: &mut S) -> GamePhase
    where
        S: ClueSource,
        S::Error: Display,
    {
        let ticket = self.begin_loading();
        let result = acquire_board(source, self.config, self.policy).await;
        self.finish_loading(ticket, result);
        self.phase
    }

    /// A click on the cell at `coords`.
    pub fn on_cell_activated(&mut self, coords: CellCoords) -> Result<ActivateOutcome> {
        match (self.phase, self.board.as_mut()) {
            (GamePhase::Ready, Some(board)) => board.activate(coords),
            _ => Err(GameError::NotReady),
        }
    }
}

impl Default for GameLifecycle {
    fn default() -> Self {
        Self::new(BoardConfig::STANDARD, RetryPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    const IDS: [CategoryId; 6] = [1, 2, 3, 4, 5, 6];
    const NEXT_IDS: [CategoryId; 6] = [7, 8, 9, 10, 11, 12];

    fn ready_lifecycle() -> GameLifecycle {
        let mut source = ScriptedSource::new()
            .with_batch(&IDS)
            .with_categories(&IDS, 5);
        let mut lifecycle = GameLifecycle::default();
        assert_eq!(block_on(lifecycle.start_game(&mut source)), GamePhase::Ready);
        lifecycle
    }

    #[test]
    fn starts_empty() {
        let lifecycle = GameLifecycle::default();

        assert_eq!(lifecycle.phase(), GamePhase::Empty);
        assert!(lifecycle.board().is_none());
        assert!(!lifecycle.has_started());
    }

    #[test]
    fn loading_clears_previous_board() {
        let mut lifecycle = ready_lifecycle();
        assert!(lifecycle.board().is_some());

        lifecycle.begin_loading();

        assert_eq!(lifecycle.phase(), GamePhase::Loading);
        assert!(lifecycle.board().is_none());
        assert!(lifecycle.has_started());
    }

    #[test]
    fn clicks_are_ignored_until_ready() {
        let mut lifecycle = GameLifecycle::default();
        assert_eq!(lifecycle.on_cell_activated((0, 0)), Err(GameError::NotReady));

        lifecycle.begin_loading();
        assert_eq!(lifecycle.on_cell_activated((0, 0)), Err(GameError::NotReady));
    }

    #[test]
    fn reveal_cycle_through_the_lifecycle() {
        let mut lifecycle = ready_lifecycle();

        assert_eq!(
            lifecycle.on_cell_activated((2, 1)),
            Ok(ActivateOutcome::QuestionShown)
        );
        assert_eq!(
            lifecycle.on_cell_activated((2, 1)),
            Ok(ActivateOutcome::AnswerShown)
        );
        assert_eq!(lifecycle.on_cell_activated((2, 1)), Ok(ActivateOutcome::NoChange));

        let board = lifecycle.board().unwrap();
        assert_eq!(board[(2, 1)].state(), RevealState::AnswerShown);
        assert_eq!(board[(2, 1)].shown_text().as_deref(), Some("CATEGORY 2 ANSWER 2"));
    }

    #[test]
    fn restart_while_ready_starts_all_clues_hidden() {
        let mut lifecycle = ready_lifecycle();
        lifecycle.on_cell_activated((0, 0)).unwrap();
        lifecycle.on_cell_activated((0, 0)).unwrap();
        lifecycle.on_cell_activated((4, 5)).unwrap();

        let mut source = ScriptedSource::new()
            .with_batch(&NEXT_IDS)
            .with_categories(&NEXT_IDS, 5);
        assert_eq!(block_on(lifecycle.start_game(&mut source)), GamePhase::Ready);

        let board = lifecycle.board().unwrap();
        assert!(
            board
                .iter_coords()
                .all(|coords| board[coords].state() == RevealState::Hidden)
        );
    }

    #[test]
    fn exhausted_retries_end_in_failed() {
        let mut source = ScriptedSource::new()
            .with_batch(&IDS)
            .with_categories(&IDS, 2);
        let mut lifecycle = GameLifecycle::new(BoardConfig::STANDARD, RetryPolicy::new(1));

        assert_eq!(block_on(lifecycle.start_game(&mut source)), GamePhase::Failed);
        assert!(lifecycle.board().is_none());
        assert_eq!(
            lifecycle.failure(),
            Some("Gave up after 1 attempts, last failure: Category 1 has 2 clues, 5 required")
        );
    }

    #[test]
    fn source_error_ends_in_failed() {
        let mut source = ScriptedSource::new();
        let mut lifecycle = GameLifecycle::default();

        assert_eq!(block_on(lifecycle.start_game(&mut source)), GamePhase::Failed);
        assert_eq!(
            lifecycle.failure(),
            Some("Clue source failed: No random batch left in the script")
        );
    }

    #[test]
    fn restart_after_failure_clears_it() {
        let mut lifecycle = GameLifecycle::new(BoardConfig::STANDARD, RetryPolicy::new(1));
        let mut failing = ScriptedSource::new();
        assert_eq!(block_on(lifecycle.start_game(&mut failing)), GamePhase::Failed);
        assert!(lifecycle.failure().is_some());

        lifecycle.begin_loading();
        assert_eq!(lifecycle.phase(), GamePhase::Loading);
        assert_eq!(lifecycle.failure(), None);

        let mut source = ScriptedSource::new()
            .with_batch(&IDS)
            .with_categories(&IDS, 5);
        assert_eq!(block_on(lifecycle.start_game(&mut source)), GamePhase::Ready);
        assert_eq!(lifecycle.failure(), None);
        assert!(lifecycle.board().is_some());
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut lifecycle = GameLifecycle::default();
        let stale = lifecycle.begin_loading();
        let current = lifecycle.begin_loading();

        let accepted = lifecycle.finish_loading::<ScriptError>(stale, Ok(standard_board(&IDS)));
        assert!(!accepted);
        assert_eq!(lifecycle.phase(), GamePhase::Loading);

        let accepted =
            lifecycle.finish_loading::<ScriptError>(current, Ok(standard_board(&NEXT_IDS)));
        assert!(accepted);
        assert_eq!(lifecycle.phase(), GamePhase::Ready);
        assert_eq!(lifecycle.board().unwrap().categories()[0].id(), 7);
    }
}
