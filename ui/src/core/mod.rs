//! Platform-agnostic building blocks shared by the notes engine and views.

pub mod error;
pub mod ids;
