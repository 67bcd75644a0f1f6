//! Core functionality for the FerryUI framework.
//!
//! FerryUI lets a declarative view tree composed in Rust be rendered by an
//! independent host UI engine that never links against Rust's object model.
//! This crate contains the three pieces that make that work:
//!
//! - the descriptor model: the [`View`] trait, [`AnyView`] erasure, the
//!   composition algebra over tuples and [`ViewList`], and [`ModifierView`]
//!   for deferred host-object transformations;
//! - the projection walk ([`project`]) that lazily translates a descriptor
//!   tree into the host-representable [`HostNode`] graph;
//! - the opaque value channel ([`Context`], [`Handle`]) that carries
//!   strongly typed Rust values across the runtime boundary as tokens the
//!   host can hold but never interpret.
//!
//! Descriptors are immutable values. Realization is synchronous, pure given
//! the descriptor's payload, and expected to run on the single thread the
//! host designates for composition; [`Context`] is `Rc`-based and therefore
//! not `Send`, which makes that assumption explicit rather than implicit.

#![no_std]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

#[macro_use]
pub mod macros;
pub mod action;
pub mod channel;
pub mod context;
pub mod env;
pub mod host;
pub mod id;
pub mod modifier;
pub mod preference;
pub mod project;
pub mod tuple;
pub mod view;

pub use action::{Action, Callback};
pub use channel::{ChannelError, Handle, Reducer, Token};
pub use context::Context;
pub use host::{HostNode, Value};
pub use id::TaggedView;
pub use modifier::ModifierView;
pub use preference::PreferenceKey;
pub use project::project;
pub use tuple::{ViewList, ViewSeq};
pub use view::{AnyView, EmptyView, View};
