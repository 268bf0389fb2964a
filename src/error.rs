//! Error types for documentation runs

use thiserror::Error;

use crate::scene::HostError;

/// Errors that end a documentation run
#[derive(Error, Debug)]
pub enum DocError {
    #[error("Please select a component or component set")]
    EmptySelection,

    #[error("Please select only one component or component set")]
    MultipleSelection,

    #[error("Selection must be a Component or Component Set. Selected: {0}")]
    NotAComponent(&'static str),

    #[error("Failed to load fonts. Please ensure {} is available.", or_list(.families))]
    FontsUnavailable { families: Vec<String> },

    #[error(transparent)]
    Host(#[from] HostError),
}

impl DocError {
    /// Whether the run was refused before any document was built
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            DocError::EmptySelection
                | DocError::MultipleSelection
                | DocError::NotAComponent(_)
                | DocError::FontsUnavailable { .. }
        )
    }

    /// Text shown to the user when the run aborts
    pub fn notice_message(&self) -> String {
        if self.is_precondition() {
            self.to_string()
        } else {
            format!("Error: {}", self)
        }
    }
}

/// Join names as "A", "A or B", or "A, B, or C"
fn or_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [first, second] => format!("{} or {}", first, second),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}
