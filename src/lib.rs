#![doc = include_str!("../README.md")]
#![no_std]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

/// Fluent builder methods available on every view.
pub mod view;
/// Structural widgets built on top of the component crates.
pub mod widget;

#[doc(inline)]
pub use view::ViewExt;

pub use ferryui_controls as controls;
pub use ferryui_layout as layout;

#[doc(inline)]
pub use ferryui_core::{
    Action, AnyView, Callback, ChannelError, Context, EmptyView, Handle, HostNode, ModifierView,
    PreferenceKey, Reducer, TaggedView, Token, Value, View, ViewList, ViewSeq,
    env::with_value,
    preference::{on_preference_change, preference},
    project,
};

pub use ferryui_controls::{Button, Slider, Stepper, Toggle, button, slider, stepper, toggle};
pub use ferryui_layout::{
    Alignment, EdgeInsets, Frame, HStack, HorizontalAlignment, Padding, Spacer, VStack,
    VerticalAlignment, ZStack,
    stack::{hstack, vstack, zstack},
};
pub use ferryui_text::{Text, text};

pub use widget::{either, when};

pub mod prelude {
    //! Commonly used traits and types for a single `use` statement.
    //!
    //! ```rust
    //! use ferryui::prelude::*;
    //!
    //! fn banner() -> impl View {
    //!     vstack((text("Ahoy"), text("Welcome aboard"))).padding()
    //! }
    //! ```

    pub use super::*;
}
