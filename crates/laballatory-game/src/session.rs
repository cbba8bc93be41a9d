use laballatory_core::{Board, Difficulty};
use laballatory_generator::{LevelGenerator, LevelSeed, SeedSequence};

use crate::{Game, GameError, Intent, IntentQueue, SessionSettings, SessionView};

/// The screen the session is on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum Mode {
    /// Choosing a difficulty; no level is loaded.
    #[display("menu")]
    Menu,
    /// A level is loaded and unsolved.
    #[display("playing")]
    Playing,
    /// The loaded level is solved.
    #[display("won")]
    Won,
}

/// The whole state of a play session, driven by [`Intent`]s.
///
/// A session starts on the menu. [`Intent::Start`] deals a level for the
/// selected [`Difficulty`] and the mode follows the board from then on: it
/// is [`Mode::Won`] exactly while the current board is solved, so undoing a
/// winning pour goes back to playing and redoing it wins again.
///
/// Level seeds are drawn from a [`SeedSequence`], so a session built with
/// [`Session::with_seed`] deals the same levels every time.
///
/// # Example
///
/// ```
/// use laballatory_core::Difficulty;
/// use laballatory_game::{Intent, Mode, Session, SessionSettings};
/// use laballatory_generator::LevelSeed;
///
/// let master = LevelSeed::from_bytes([3; 32]);
/// let mut session = Session::with_seed(SessionSettings::default(), master);
/// assert_eq!(session.mode(), Mode::Menu);
///
/// session.dispatch(Intent::SelectDifficulty(Difficulty::Easy));
/// session.dispatch(Intent::Start);
/// assert_eq!(session.mode(), Mode::Playing);
///
/// let view = session.view();
/// assert_eq!(view.tubes.len(), 5);
/// assert_eq!(view.moves, 0);
///
/// // Undo is refused on a fresh board and leaves the session untouched.
/// assert!(!session.dispatch(Intent::Undo));
/// assert_eq!(session.view(), view);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    settings: SessionSettings,
    seeds: SeedSequence,
    game: Option<Game>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session on the menu with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(SessionSettings::default())
    }

    /// Creates a session on the menu, seeding levels from entropy.
    #[must_use]
    pub fn with_settings(settings: SessionSettings) -> Self {
        Self::with_seed_sequence(settings, SeedSequence::from_entropy())
    }

    /// Creates a session on the menu whose levels derive from `master`.
    #[must_use]
    pub fn with_seed(settings: SessionSettings, master: LevelSeed) -> Self {
        Self::with_seed_sequence(settings, SeedSequence::new(master))
    }

    fn with_seed_sequence(settings: SessionSettings, seeds: SeedSequence) -> Self {
        Self {
            settings,
            seeds,
            game: None,
        }
    }

    /// Returns the current settings.
    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Returns the selected difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    /// Returns the master seed levels are derived from.
    #[must_use]
    pub fn master_seed(&self) -> LevelSeed {
        self.seeds.master()
    }

    /// Returns the loaded level, `None` on the menu.
    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match &self.game {
            None => Mode::Menu,
            Some(game) if game.is_won() => Mode::Won,
            Some(_) => Mode::Playing,
        }
    }

    /// Builds the read model for the current state.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView::new(self)
    }

    /// Applies `intent`, returning `true` if it was accepted.
    ///
    /// Refused intents are logged at debug level and leave the session as it
    /// was, apart from a refused pour re-arming the clicked tube.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        match self.try_dispatch(intent) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("ignored intent: {err}");
                false
            }
        }
    }

    /// Dispatches every queued intent in order.
    pub fn dispatch_all(&mut self, queue: &mut IntentQueue) {
        for intent in queue.take_all() {
            self.dispatch(intent);
        }
    }

    /// Applies `intent`.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidModeTransition`] if the intent is not accepted in
    ///   the current mode.
    /// - [`GameError::IllegalMove`] if a tube click is refused.
    /// - [`GameError::EmptyHistory`] if there is nothing to undo or redo.
    pub fn try_dispatch(&mut self, intent: Intent) -> Result<(), GameError> {
        let mode = self.mode();
        match (mode, intent) {
            (Mode::Menu, Intent::SelectDifficulty(difficulty)) => {
                log::debug!("selected {difficulty} difficulty");
                self.settings.difficulty = difficulty;
            }
            (Mode::Menu, Intent::Start) | (Mode::Playing | Mode::Won, Intent::Restart) => {
                self.start_level();
            }
            (Mode::Playing | Mode::Won, Intent::ToMainMenu) => self.game = None,
            (Mode::Playing, Intent::TubeClicked(index)) => {
                self.game_mut(mode, intent)?.click_tube(index)?;
            }
            (Mode::Playing | Mode::Won, Intent::Undo) => self.game_mut(mode, intent)?.undo()?,
            (Mode::Playing | Mode::Won, Intent::Redo) => self.game_mut(mode, intent)?.redo()?,
            _ => return Err(GameError::InvalidModeTransition { mode, intent }),
        }

        let next = self.mode();
        if next != mode {
            log::debug!("mode: {mode} -> {next}");
            if next.is_won()
                && let Some(game) = &self.game
            {
                log::info!("level won in {} moves", game.moves());
            }
        }
        Ok(())
    }

    /// Loads a hand-made board, replacing any level in progress.
    ///
    /// The level has no seed, and [`Intent::Restart`] moves on to a generated
    /// level at the selected difficulty.
    pub fn play_board(&mut self, board: Board) {
        log::info!("custom level: {board}");
        self.game = Some(Game::from_board(board, self.settings.history_limit));
    }

    fn game_mut(&mut self, mode: Mode, intent: Intent) -> Result<&mut Game, GameError> {
        self.game
            .as_mut()
            .ok_or(GameError::InvalidModeTransition { mode, intent })
    }

    fn start_level(&mut self) {
        let difficulty = self.settings.difficulty;
        let seed = self.seeds.next_seed();
        let level = LevelGenerator::new(difficulty.config()).generate_with_seed(seed);
        log::info!("new {difficulty} level, seed={seed}");
        self.game = Some(Game::new(level, self.settings.history_limit));
    }
}
