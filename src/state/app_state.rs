//! Application state definitions

use crate::state::form::{FieldErrors, FieldId, SignupForm};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    #[default]
    Landing,
    Signup,
    Privacy,
}

impl View {
    /// Sidebar entry backing this view, if it has one
    pub fn sidebar_index(&self) -> Option<usize> {
        match self {
            Self::Splash => None,
            Self::Landing => Some(0),
            Self::Signup => Some(1),
            Self::Privacy => Some(2),
        }
    }
}

/// Where the current submission attempt stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// Request in flight; further submits are ignored until it settles
    Submitting,
    /// Last attempt landed in the spreadsheet
    Submitted,
    /// Last attempt failed with the message to show in the banner
    Error(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub sidebar_index: usize,

    // Sign-up form
    pub form: SignupForm,
    pub field_errors: FieldErrors,
    pub submission: SubmissionState,

    // UI state
    pub scroll_offset: usize,
}

impl AppState {
    /// Switch views, keeping the sidebar highlight in sync
    pub fn go_to(&mut self, view: View) {
        if self.current_view == view {
            return;
        }
        self.current_view = view;
        if let Some(index) = view.sidebar_index() {
            self.sidebar_index = index;
        }
        self.scroll_offset = 0;
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down a page (10 lines)
    pub fn scroll_down_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10);
    }

    /// Scroll up a page (10 lines)
    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    /// Drop the validation message for one field, leaving the rest in place.
    /// Called whenever the user edits that field.
    pub fn clear_field_error(&mut self, field: FieldId) {
        self.field_errors.remove(&field);
    }
}
