//! Crate-wide error type.
//!
//! Every failure carries the process exit code it should map to:
//!
//! - `1` usage errors
//! - `2` input/output errors (unreadable source, bad options, unwritable outputs)
//! - `4` internal contract violations

pub const EXIT_USAGE: u8 = 1;
pub const EXIT_IO: u8 = 2;
pub const EXIT_INTERNAL: u8 = 4;

/// A failed conversion run: the message for stderr plus the exit code `main` returns.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(EXIT_IO, message)
    }

    /// Invalid option value. Shares the input/output exit code.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(EXIT_IO, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(EXIT_INTERNAL, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
