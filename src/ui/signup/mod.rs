//! Sign-up form view and its field widgets

mod field_renderer;
mod form;

pub use form::draw;
