//! Sign-up form state

mod options;
mod signup_form;
mod validation;

pub use options::*;
pub use signup_form::*;
pub use validation::*;
