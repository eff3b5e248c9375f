//! Front-end error type.
//!
//! The numerical core never fails: NaN/Inf propagate through the closed-form
//! models and an unknown baseline family degrades to a zero strain. Errors
//! exist only for invalid CLI input and file I/O, and carry the process exit
//! code the binary should return.

/// Exit code for invalid arguments, grids, or unreadable/unwritable files.
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Exit code for a run that completed but produced unusable output.
pub const EXIT_RUN_FAILED: u8 = 4;

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

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INVALID_INPUT, message)
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
