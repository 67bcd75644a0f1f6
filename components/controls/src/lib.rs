//! Interactive controls for FerryUI.
//!
//! Controls are leaves whose behavior lives in closures. Realizing a
//! control boxes its [`Action`](ferryui_core::Action) or
//! [`Callback`](ferryui_core::Callback) into the context's value channel
//! and attaches the resulting handle as an attribute; the host fires the
//! closure later by passing the handle's token back through the context's
//! dispatch entry points.

#![no_std]
extern crate alloc;

pub mod button;
pub mod slider;
pub mod stepper;
pub mod toggle;

#[cfg(test)]
mod tests;

pub use button::{Button, button};
pub use slider::{Slider, slider};
pub use stepper::{Stepper, stepper};
pub use toggle::{Toggle, toggle};
