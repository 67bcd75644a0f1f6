//! Structural widgets built from the core composition pieces.

pub mod condition;

#[doc(inline)]
pub use condition::{When, either, when};
