//! A single player's Numberle session
//!
//! The session is the only owner of mutable game state. Presentation layers
//! hold it, call into it, and re-query its getters after being notified.

use super::config::{GameConfig, Selection};
use crate::core::{ALPHABET, Equation, FeedbackRow, KeyboardColors, MAX_ATTEMPTS};
use crate::rules::{ValidationError, validate};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, info};

/// Receives a notification after every state change
///
/// There is no payload: observers re-read whatever they need from the session.
pub trait SessionObserver {
    fn on_change(&self, session: &GameSession);
}

impl<F> SessionObserver for F
where
    F: Fn(&GameSession),
{
    fn on_change(&self, session: &GameSession) {
        self(session);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("the game is over; start a new game")]
    GameOver,
    #[error("no equations available")]
    NoEquationsAvailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

/// Game state for one player timeline
pub struct GameSession {
    corpus: Vec<Equation>,
    config: GameConfig,
    rng: StdRng,
    target: Equation,
    remaining_attempts: usize,
    won: bool,
    unused: FxHashSet<u8>,
    keyboard: KeyboardColors,
    history: Vec<(Equation, FeedbackRow)>,
    last_error: Option<ValidationError>,
    observers: Vec<Box<dyn SessionObserver>>,
}

fn select_target(
    corpus: &[Equation],
    selection: Selection,
    rng: &mut StdRng,
) -> Result<Equation, SessionError> {
    let target = match selection {
        Selection::Random => corpus.choose(rng),
        Selection::First => corpus.first(),
    };
    target.cloned().ok_or(SessionError::NoEquationsAvailable)
}

impl GameSession {
    /// Create a session and start its first game
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoEquationsAvailable` if `corpus` is empty.
    ///
    /// # Examples
    /// ```
    /// use numberle::core::Equation;
    /// use numberle::game::{GameConfig, GameSession};
    ///
    /// let corpus = vec![Equation::new("1+2+3=6").unwrap()];
    /// let mut session = GameSession::new(corpus, GameConfig::fixed()).unwrap();
    ///
    /// let row = session.submit_guess("1+2+3=6").unwrap();
    /// assert!(row.is_perfect());
    /// assert!(session.is_game_won());
    /// ```
    pub fn new(corpus: Vec<Equation>, config: GameConfig) -> Result<Self, SessionError> {
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let target = select_target(&corpus, config.selection, &mut rng)?;

        info!(equations = corpus.len(), selection = ?config.selection, "new game");

        Ok(Self {
            corpus,
            config,
            rng,
            target,
            remaining_attempts: MAX_ATTEMPTS,
            won: false,
            unused: ALPHABET.iter().copied().collect(),
            keyboard: KeyboardColors::new(),
            history: Vec::with_capacity(MAX_ATTEMPTS),
            last_error: None,
            observers: Vec::new(),
        })
    }

    /// Register an observer for state changes
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.on_change(self);
        }
    }

    /// Pick a new target and reset all per-game state
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoEquationsAvailable` if the corpus is empty.
    pub fn start_new_game(&mut self) -> Result<(), SessionError> {
        self.target = select_target(&self.corpus, self.config.selection, &mut self.rng)?;
        self.remaining_attempts = MAX_ATTEMPTS;
        self.won = false;
        self.unused = ALPHABET.iter().copied().collect();
        self.keyboard.clear();
        self.history.clear();
        self.last_error = None;

        info!("new game");
        self.notify();
        Ok(())
    }

    /// Validate a guess without playing it, remembering the failure reason
    pub fn check_input(&mut self, raw: &str) -> bool {
        match validate(raw) {
            Ok(_) => true,
            Err(err) => {
                self.last_error = Some(err);
                false
            }
        }
    }

    /// Play a guess
    ///
    /// An invalid guess is rejected without using up an attempt.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Invalid` for a guess that fails validation and
    /// `SessionError::GameOver` once the game has been won or lost.
    pub fn submit_guess(&mut self, raw: &str) -> Result<FeedbackRow, SessionError> {
        if self.is_game_over() {
            return Err(SessionError::GameOver);
        }

        let guess = validate(raw).inspect_err(|&err| {
            debug!(guess = raw, error = %err, "guess rejected");
            self.last_error = Some(err);
        })?;

        let row = FeedbackRow::calculate(&guess, &self.target);
        self.keyboard.record(&guess, &row);
        for symbol in guess.chars() {
            self.unused.remove(symbol);
        }
        self.remaining_attempts -= 1;
        self.won = row.is_perfect();

        debug!(
            guess = %guess,
            feedback = %row.to_emoji(),
            remaining = self.remaining_attempts,
            "guess played"
        );
        match self.status() {
            GameStatus::Won => info!(attempts = self.history.len() + 1, "game won"),
            GameStatus::Lost => info!(target = %self.target, "game lost"),
            GameStatus::Active => {}
        }

        self.history.push((guess, row));
        self.notify();
        Ok(row)
    }

    /// Play a guess that has already passed [`Self::check_input`]
    ///
    /// # Errors
    ///
    /// Same as [`Self::submit_guess`].
    pub fn process_input(&mut self, raw: &str) -> Result<(), SessionError> {
        self.submit_guess(raw).map(|_| ())
    }

    /// Reason the most recent invalid guess was rejected
    #[must_use]
    pub const fn error(&self) -> Option<ValidationError> {
        self.last_error
    }

    /// Feedback for the most recent guess of this game
    #[must_use]
    pub fn colors(&self) -> Option<&FeedbackRow> {
        self.history.last().map(|(_, row)| row)
    }

    #[must_use]
    pub const fn button_colors(&self) -> &KeyboardColors {
        &self.keyboard
    }

    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        self.remaining_attempts
    }

    #[must_use]
    pub const fn target(&self) -> &Equation {
        &self.target
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Guesses played this game, with their feedback
    #[must_use]
    pub fn history(&self) -> &[(Equation, FeedbackRow)] {
        &self.history
    }

    /// Symbols not yet used in any guess this game, in keyboard order
    #[must_use]
    pub fn unused_chars(&self) -> Vec<char> {
        ALPHABET
            .iter()
            .filter(|symbol| self.unused.contains(*symbol))
            .map(|&symbol| char::from(symbol))
            .collect()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.remaining_attempts == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Active
        }
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.won || self.remaining_attempts == 0
    }

    #[must_use]
    pub const fn is_game_won(&self) -> bool {
        self.won
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    fn corpus(equations: &[&str]) -> Vec<Equation> {
        equations.iter().map(|&e| Equation::new(e).unwrap()).collect()
    }

    fn fixed_session() -> GameSession {
        GameSession::new(corpus(&["1+2+3=6", "12+3=15"]), GameConfig::fixed()).unwrap()
    }

    fn counting_observer(session: &mut GameSession) -> Rc<Cell<usize>> {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        session.subscribe(move |_: &GameSession| seen.set(seen.get() + 1));
        count
    }

    #[test]
    fn new_session_starts_active() {
        let session = fixed_session();

        assert_eq!(session.target().text(), "1+2+3=6");
        assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS);
        assert_eq!(session.status(), GameStatus::Active);
        assert!(!session.is_game_over());
        assert!(!session.is_game_won());
        assert_eq!(session.unused_chars().len(), 15);
        assert!(session.colors().is_none());
        assert!(session.button_colors().is_empty());
        assert!(session.error().is_none());
    }

    #[test]
    fn empty_corpus_has_no_equations() {
        let result = GameSession::new(Vec::new(), GameConfig::default());
        assert!(matches!(result, Err(SessionError::NoEquationsAvailable)));
    }

    #[test]
    fn invalid_guess_keeps_attempts() {
        let mut session = fixed_session();
        let notified = counting_observer(&mut session);

        let err = session.submit_guess("1+1=2").unwrap_err();

        assert_eq!(err, SessionError::Invalid(ValidationError::InvalidLength));
        assert_eq!(err.to_string(), "length must be 7");
        assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS);
        assert_eq!(session.error(), Some(ValidationError::InvalidLength));
        assert_eq!(session.unused_chars().len(), 15);
        assert_eq!(notified.get(), 0);
    }

    #[test]
    fn valid_guess_uses_one_attempt() {
        use Color::{Green, Grey, Orange};

        let mut session = fixed_session();
        let row = session.submit_guess("1+1-2=0").unwrap();

        assert_eq!(
            row.colors(),
            &[Green, Green, Grey, Grey, Orange, Green, Grey]
        );
        assert_eq!(session.colors(), Some(&row));
        assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS - 1);
        assert_eq!(session.history().len(), 1);
        assert!(!session.is_game_over());
    }

    #[test]
    fn guessed_symbols_leave_unused_set_regardless_of_colour() {
        let mut session = fixed_session();
        session.submit_guess("1+1-2=0").unwrap();

        // '-' and '0' were grey but still count as used
        assert_eq!(
            session.unused_chars(),
            vec!['3', '4', '5', '6', '7', '8', '9', '*', '/']
        );
    }

    #[test]
    fn exact_guess_wins() {
        let mut session = fixed_session();
        let row = session.submit_guess("1+2+3=6").unwrap();

        assert!(row.is_perfect());
        assert_eq!(session.status(), GameStatus::Won);
        assert!(session.is_game_over());
        assert!(session.is_game_won());
        assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS - 1);
        assert!(
            session
                .button_colors()
                .iter()
                .all(|(_, color)| color == Color::Green)
        );
    }

    #[test]
    fn six_misses_lose() {
        let mut session = fixed_session();

        for _ in 0..MAX_ATTEMPTS {
            session.submit_guess("12+3=15").unwrap();
        }

        assert_eq!(session.remaining_attempts(), 0);
        assert_eq!(session.status(), GameStatus::Lost);
        assert!(session.is_game_over());
        assert!(!session.is_game_won());
    }

    #[test]
    fn guesses_after_game_over_are_rejected() {
        let mut session = fixed_session();
        session.submit_guess("1+2+3=6").unwrap();

        assert_eq!(
            session.submit_guess("12+3=15"),
            Err(SessionError::GameOver)
        );
        assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS - 1);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn keyboard_green_survives_later_guesses() {
        let mut session = fixed_session();
        session.submit_guess("1+1-2=0").unwrap();
        session.submit_guess("6-5+1=2").unwrap();

        assert_eq!(session.button_colors().get(b'1'), Some(Color::Green));
        assert_eq!(session.button_colors().get(b'6'), Some(Color::Orange));
        assert_eq!(session.button_colors().get(b'5'), Some(Color::Grey));
    }

    #[test]
    fn check_input_records_error_without_playing() {
        let mut session = fixed_session();

        assert!(!session.check_input("123+456"));
        assert_eq!(session.error(), Some(ValidationError::MissingEquals));

        assert!(session.check_input("12+3=15"));
        assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS);

        session.process_input("12+3=15").unwrap();
        assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS - 1);
    }

    #[test]
    fn observers_notified_on_every_mutation() {
        let mut session = fixed_session();
        let notified = counting_observer(&mut session);

        session.submit_guess("12+3=15").unwrap();
        assert_eq!(notified.get(), 1);

        session.submit_guess("bad").unwrap_err();
        assert_eq!(notified.get(), 1);

        session.start_new_game().unwrap();
        assert_eq!(notified.get(), 2);
    }

    #[test]
    fn observers_see_updated_state() {
        let mut session = fixed_session();
        let remaining = Rc::new(Cell::new(0));
        let seen = Rc::clone(&remaining);
        session.subscribe(move |s: &GameSession| seen.set(s.remaining_attempts()));

        session.submit_guess("12+3=15").unwrap();
        assert_eq!(remaining.get(), MAX_ATTEMPTS - 1);
    }

    #[test]
    fn start_new_game_resets_state() {
        let mut session = fixed_session();
        session.submit_guess("1+1=2").unwrap_err();
        session.submit_guess("1+2+3=6").unwrap();

        session.start_new_game().unwrap();

        assert_eq!(session.status(), GameStatus::Active);
        assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS);
        assert_eq!(session.unused_chars().len(), 15);
        assert!(session.history().is_empty());
        assert!(session.button_colors().is_empty());
        assert!(session.error().is_none());
        assert_eq!(session.target().text(), "1+2+3=6");
    }

    #[test]
    fn seeded_random_selection_is_reproducible() {
        let equations = corpus(&["1+2+3=6", "12+3=15", "8/4*4=8", "63-63=0", "9-6=3+0"]);
        let config = GameConfig {
            seed: Some(42),
            ..GameConfig::default()
        };

        let mut a = GameSession::new(equations.clone(), config.clone()).unwrap();
        let mut b = GameSession::new(equations.clone(), config).unwrap();

        for _ in 0..5 {
            assert_eq!(a.target(), b.target());
            assert!(equations.contains(a.target()));
            a.start_new_game().unwrap();
            b.start_new_game().unwrap();
        }
    }
}
