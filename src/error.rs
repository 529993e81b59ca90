use thiserror::Error;

/// Rejected player input.  Front ends report it and re-prompt; nothing
/// here ever reaches the character state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please type an integer between the range 1-4")]
    NotANumber,
    #[error("Invalid choice {0}. Please select a character from 1-4")]
    UnknownCharacter(u8),
    #[error("Invalid action {0:?}. Please select an action from 1-3 (or 4 where offered) or type 'end' to exit.")]
    UnknownAction(String),
}
