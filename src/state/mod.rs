//! Application state module

mod app_state;
mod form;
mod splash_state;

pub use app_state::*;
pub use form::*;
pub use splash_state::*;
