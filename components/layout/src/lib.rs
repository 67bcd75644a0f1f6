//! Layout containers for FerryUI.
//!
//! Containers realize to host nodes whose ordered children are the
//! realized children of the container; alignment and edge configuration
//! cross the boundary as stable integer keys (see [`stack`]).

#![no_std]
extern crate alloc;

pub mod frame;
pub mod padding;
pub mod spacer;
pub mod stack;

#[cfg(test)]
mod tests;

pub use frame::Frame;
pub use padding::{EdgeInsets, Padding};
pub use spacer::Spacer;
pub use stack::{Alignment, HStack, HorizontalAlignment, VStack, VerticalAlignment, ZStack};
