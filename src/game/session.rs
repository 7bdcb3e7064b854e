//! Game session: guess history, validation and termination

use super::dictionary::Dictionary;
use super::error::GuessError;
use super::MAX_GUESSES;
use crate::core::{Guess, SecretWord, WORD_LENGTH};
use tracing::debug;

/// Where a session stands after its latest guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Guesses remain and the word has not been found
    InProgress,
    /// The latest accepted guess spells the secret word
    Won,
    /// All guesses are used up without finding the word
    Lost,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_ended(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One game: the secret word, the accepted guesses and the dictionary
///
/// The session is mutated only by [`GameSession::submit_guess`]. A rejected
/// guess never changes it, and once the game has ended every further guess
/// is rejected.
///
/// # Examples
/// ```
/// use wordle_rules::game::{GameSession, GameState, WordList};
///
/// let words = WordList::new(["hello", "viola"]);
/// let mut session = GameSession::new("HELLO", words);
///
/// session.submit_guess("viola").unwrap();
/// assert_eq!(session.state(), GameState::InProgress);
///
/// session.submit_guess("hello").unwrap();
/// assert!(session.is_word_guessed());
/// assert!(session.should_end_game());
/// assert_eq!(session.guesses_made(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<D> {
    secret: SecretWord,
    history: Vec<Guess>,
    dictionary: D,
}

impl<D: Dictionary> GameSession<D> {
    /// Start a game around `secret`
    ///
    /// The secret is upper-cased but otherwise taken as is.
    #[must_use]
    pub fn new(secret: &str, dictionary: D) -> Self {
        Self::with_secret(SecretWord::new(secret), dictionary)
    }

    #[must_use]
    pub fn with_secret(secret: SecretWord, dictionary: D) -> Self {
        Self {
            secret,
            history: Vec::with_capacity(MAX_GUESSES),
            dictionary,
        }
    }

    /// Validate, score and record a guess
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// 1. no guesses left → [`GuessError::MaxGuessesReached`]
    /// 2. word already found → [`GuessError::GameAlreadyEnded`]
    /// 3. not five letters after normalization → [`GuessError::InvalidLength`]
    /// 4. rejected by the dictionary → [`GuessError::UnknownWord`]
    ///
    /// # Errors
    ///
    /// Returns the first failing check; the session is unchanged.
    ///
    /// # Panics
    /// Will not panic - the `expect()` call follows a successful push.
    pub fn submit_guess(&mut self, input: &str) -> Result<&Guess, GuessError> {
        let guess = self
            .validate(input)
            .inspect_err(|err| debug!(input, %err, "rejected guess"))?;

        let scored = guess.score(&self.secret);
        debug!(
            guess = %scored,
            feedback = %scored.to_emoji(),
            attempt = self.history.len() + 1,
            "accepted guess"
        );

        self.history.push(scored);
        Ok(self.history.last().expect("guess was just recorded"))
    }

    fn validate(&self, input: &str) -> Result<Guess, GuessError> {
        if self.history.len() >= MAX_GUESSES {
            return Err(GuessError::MaxGuessesReached);
        }

        if self.is_word_guessed() {
            return Err(GuessError::GameAlreadyEnded);
        }

        validate_word(input, &self.dictionary)
    }
}

/// Normalize `input` and apply the word checks of a guess
///
/// The guess must have exactly five letters after normalization and the
/// dictionary must accept its uppercase text, checked in that order. Session
/// state (guesses left, word already found) is not considered.
///
/// # Errors
///
/// Returns [`GuessError::InvalidLength`] or [`GuessError::UnknownWord`].
///
/// # Examples
/// ```
/// use wordle_rules::game::{GuessError, WordList, validate_word};
///
/// let words = WordList::new(["hello"]);
/// assert_eq!(validate_word("Hello", &words).unwrap().render(), "HELLO");
/// assert_eq!(
///     validate_word("hill", &words),
///     Err(GuessError::InvalidLength { length: 4 })
/// );
/// ```
pub fn validate_word<D: Dictionary + ?Sized>(
    input: &str,
    dictionary: &D,
) -> Result<Guess, GuessError> {
    let guess = Guess::normalize(input);
    let word = guess.render();

    if word.len() != WORD_LENGTH {
        return Err(GuessError::InvalidLength { length: word.len() });
    }

    if !dictionary.is_word(&word) {
        return Err(GuessError::UnknownWord { word });
    }

    Ok(guess)
}

impl<D> GameSession<D> {
    /// True when the latest accepted guess spells the secret word
    ///
    /// Returns `false` before the first guess.
    #[must_use]
    pub fn is_word_guessed(&self) -> bool {
        self.history
            .last()
            .is_some_and(|guess| guess.spells(&self.secret))
    }

    /// True once all guesses are used or the word has been found
    ///
    /// Returns `false` before the first guess.
    #[must_use]
    pub fn should_end_game(&self) -> bool {
        self.history.len() == MAX_GUESSES || self.is_word_guessed()
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.is_word_guessed() {
            GameState::Won
        } else if self.history.len() >= MAX_GUESSES {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Accepted guesses in submission order, all fully scored
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn last_guess(&self) -> Option<&Guess> {
        self.history.last()
    }

    #[inline]
    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES - self.history.len()
    }

    /// Emoji grid of every accepted guess, one row per line
    #[must_use]
    pub fn share_grid(&self) -> String {
        self.history
            .iter()
            .map(Guess::to_emoji)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};
    use crate::game::WordList;

    fn words() -> WordList {
        WordList::new([
            "hello", "viola", "crane", "slate", "audio", "pride", "quick", "fight", "mount",
        ])
    }

    fn session() -> GameSession<WordList> {
        GameSession::new("HELLO", words())
    }

    #[test]
    fn new_session_is_empty() {
        let session = GameSession::new("hello", words());
        assert_eq!(session.secret().as_str(), "HELLO");
        assert_eq!(session.guesses_made(), 0);
        assert_eq!(session.guesses_remaining(), 6);
        assert!(session.history().is_empty());
        assert!(session.last_guess().is_none());
        assert_eq!(session.share_grid(), "");
    }

    #[test]
    fn no_guesses_is_not_ended() {
        let session = session();
        assert!(!session.is_word_guessed());
        assert!(!session.should_end_game());
        assert_eq!(session.state(), GameState::InProgress);
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut session = session();
        let scored = session.submit_guess("hello").unwrap();
        assert!(scored.is_all_correct());

        assert!(session.is_word_guessed());
        assert!(session.should_end_game());
        assert_eq!(session.guesses_made(), 1);
        assert_eq!(session.state(), GameState::Won);
        assert!(session.state().is_ended());
    }

    #[test]
    fn accepted_guess_is_scored_and_recorded() {
        let mut session = session();
        let scored = session.submit_guess("Viola").unwrap().clone();

        assert_eq!(scored.render(), "VIOLA");
        assert_eq!(
            scored.statuses(),
            vec![Absent, Absent, Present, Correct, Absent]
        );
        assert_eq!(session.history(), &[scored]);
        assert!(!session.is_word_guessed());
        assert!(!session.should_end_game());
        assert_eq!(session.guesses_remaining(), 5);
    }

    #[test]
    fn short_guess_is_invalid_length() {
        let mut session = session();
        assert_eq!(
            session.submit_guess("hill"),
            Err(GuessError::InvalidLength { length: 4 })
        );
        assert_eq!(session.guesses_made(), 0);
    }

    #[test]
    fn long_guess_is_invalid_length() {
        let mut session = session();
        assert_eq!(
            session.submit_guess("helloo"),
            Err(GuessError::InvalidLength { length: 6 })
        );
        assert_eq!(
            session.submit_guess(""),
            Err(GuessError::InvalidLength { length: 0 })
        );
    }

    #[test]
    fn length_counts_letters_only() {
        let mut session = session();
        // Punctuation is dropped before measuring
        assert!(session.submit_guess(" h-e-l-l-o! ").is_ok());

        let mut session = GameSession::new("HELLO", words());
        assert_eq!(
            session.submit_guess("h3llo"),
            Err(GuessError::InvalidLength { length: 4 })
        );
    }

    #[test]
    fn unknown_word_is_rejected() {
        let mut session = session();
        assert_eq!(
            session.submit_guess("hgdle"),
            Err(GuessError::UnknownWord {
                word: "HGDLE".to_string()
            })
        );
        assert_eq!(session.guesses_made(), 0);
    }

    #[test]
    fn dictionary_receives_uppercase_text() {
        let mut session = GameSession::new("HELLO", |word: &str| word == "VIOLA");
        assert!(session.submit_guess("viola").is_ok());
        assert_eq!(
            session.submit_guess("crane"),
            Err(GuessError::UnknownWord {
                word: "CRANE".to_string()
            })
        );
    }

    #[test]
    fn submit_returns_the_recorded_guess() {
        let mut session = session();
        let returned = session.submit_guess("crane").unwrap().clone();
        let returned_win = session.submit_guess("hello").unwrap().clone();

        assert_eq!(session.history(), &[returned, returned_win]);
        assert_eq!(session.last_guess().map(Guess::render).as_deref(), Some("HELLO"));
    }

    #[test]
    fn validate_word_skips_session_state() {
        let words = words();
        assert_eq!(
            validate_word("viola", &words).map(|guess| guess.render()),
            Ok("VIOLA".to_string())
        );
        assert!(!validate_word("viola", &words).unwrap().is_scored());
        assert_eq!(
            validate_word("hill", &words),
            Err(GuessError::InvalidLength { length: 4 })
        );
        assert_eq!(
            validate_word("hgdle", &words),
            Err(GuessError::UnknownWord {
                word: "HGDLE".to_string()
            })
        );
    }

    #[test]
    fn length_is_checked_before_dictionary() {
        // Not a word and the wrong length: length wins
        let mut session = session();
        assert_eq!(
            session.submit_guess("zzz"),
            Err(GuessError::InvalidLength { length: 3 })
        );
    }

    #[test]
    fn six_misses_end_the_game() {
        let mut session = session();
        for word in ["viola", "crane", "slate", "audio", "pride", "quick"] {
            assert!(!session.should_end_game());
            session.submit_guess(word).unwrap();
        }

        assert_eq!(session.guesses_made(), 6);
        assert_eq!(session.guesses_remaining(), 0);
        assert!(!session.is_word_guessed());
        assert!(session.should_end_game());
        assert_eq!(session.state(), GameState::Lost);
    }

    #[test]
    fn full_history_always_refuses() {
        let mut session = session();
        for word in ["viola", "crane", "slate", "audio", "pride", "quick"] {
            session.submit_guess(word).unwrap();
        }
        let before = session.history().to_vec();

        // Max guesses takes precedence over every other check
        for input in ["fight", "hello", "hill", "hgdle"] {
            assert_eq!(
                session.submit_guess(input),
                Err(GuessError::MaxGuessesReached)
            );
        }
        assert_eq!(session.history(), before.as_slice());
        assert_eq!(session.guesses_made(), 6);
    }

    #[test]
    fn win_on_last_guess() {
        let mut session = session();
        for word in ["viola", "crane", "slate", "audio", "pride"] {
            session.submit_guess(word).unwrap();
        }
        session.submit_guess("hello").unwrap();

        assert_eq!(session.state(), GameState::Won);
        assert_eq!(
            session.submit_guess("fight"),
            Err(GuessError::MaxGuessesReached)
        );
    }

    #[test]
    fn guesses_after_win_are_refused() {
        let mut session = session();
        session.submit_guess("hello").unwrap();

        assert_eq!(
            session.submit_guess("viola"),
            Err(GuessError::GameAlreadyEnded)
        );
        // Ended state outranks input validation
        assert_eq!(
            session.submit_guess("hill"),
            Err(GuessError::GameAlreadyEnded)
        );
        assert_eq!(session.guesses_made(), 1);
    }

    #[test]
    fn rejections_leave_state_untouched() {
        let mut session = session();
        session.submit_guess("crane").unwrap();
        let before = session.history().to_vec();

        assert!(session.submit_guess("hill").is_err());
        assert!(session.submit_guess("hgdle").is_err());

        assert_eq!(session.history(), before.as_slice());
        assert_eq!(session.state(), GameState::InProgress);
    }

    #[test]
    fn repeated_guess_is_allowed() {
        let mut session = session();
        session.submit_guess("crane").unwrap();
        session.submit_guess("crane").unwrap();
        assert_eq!(session.guesses_made(), 2);
    }

    #[test]
    fn history_keeps_submission_order() {
        let mut session = session();
        for word in ["mount", "fight", "crane"] {
            session.submit_guess(word).unwrap();
        }

        let rendered: Vec<String> = session.history().iter().map(Guess::render).collect();
        assert_eq!(rendered, vec!["MOUNT", "FIGHT", "CRANE"]);
        assert!(session.history().iter().all(Guess::is_scored));
        assert_eq!(session.last_guess().map(Guess::render).as_deref(), Some("CRANE"));
    }

    #[test]
    fn share_grid_rows() {
        let mut session = session();
        session.submit_guess("viola").unwrap();
        session.submit_guess("hello").unwrap();
        assert_eq!(session.share_grid(), "⬛⬛🟨🟩⬛\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn unvalidated_secret_can_never_be_won() {
        let mut session = GameSession::new("abc", words());
        session.submit_guess("crane").unwrap();
        assert!(!session.is_word_guessed());
        assert_eq!(session.state(), GameState::InProgress);
    }
}
