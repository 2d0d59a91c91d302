//! Sets module - unique-value collections and set algebra

mod element;
mod value_set;

pub use element::Element;
pub use value_set::{SetError, ValueSet};
