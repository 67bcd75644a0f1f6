//! Control realization and host-dispatch tests.
//!
//! Each control boxes its closure into the channel; these tests play the
//! host role, pulling the handle token off the realized node and firing
//! it through the context.

use alloc::rc::Rc;
use core::cell::Cell;

use ferryui_core::{Context, EmptyView, HostNode, Token, Value, View};

use crate::{button, slider, stepper, toggle};

fn handle_token(node: &HostNode, key: &str) -> Token {
    node.get(key)
        .and_then(Value::as_handle)
        .map(ferryui_core::Handle::token)
        .unwrap_or_else(|| panic!("missing handle attribute {key}"))
}

#[test]
fn button_action_fires_through_the_context() {
    let ctx = Context::new();
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    let node = button(EmptyView, move || counter.set(counter.get() + 1)).realize(&ctx);
    let token = handle_token(&node, "action");
    ctx.invoke(token).unwrap();
    ctx.invoke(token).unwrap();
    assert_eq!(hits.get(), 2);
}

#[test]
fn dropping_the_node_releases_the_boxed_action() {
    let ctx = Context::new();
    let node = button(EmptyView, || {}).realize(&ctx);
    let token = handle_token(&node, "action");
    assert_eq!(ctx.live_handles(), 1);
    drop(node);
    assert_eq!(ctx.live_handles(), 0);
    assert!(ctx.invoke(token).is_err());
}

#[test]
fn toggle_carries_state_and_delivers_flips() {
    let ctx = Context::new();
    let seen = Rc::new(Cell::new(false));
    let sink = seen.clone();
    let node = toggle(EmptyView, true, move |state| sink.set(state)).realize(&ctx);
    assert_eq!(node.get("is-on").and_then(Value::as_bool), Some(true));
    ctx.invoke_with(handle_token(&node, "on-change"), false)
        .unwrap();
    assert!(!seen.get());
}

#[test]
fn slider_realizes_range_and_delivers_positions() {
    let ctx = Context::new();
    let seen = Rc::new(Cell::new(0.0_f64));
    let sink = seen.clone();
    let node = slider(0.0..=100.0, 25.0, move |value| sink.set(value)).realize(&ctx);
    assert_eq!(node.get("min").and_then(Value::as_float), Some(0.0));
    assert_eq!(node.get("max").and_then(Value::as_float), Some(100.0));
    assert_eq!(node.get("value").and_then(Value::as_float), Some(25.0));
    ctx.invoke_with(handle_token(&node, "on-change"), 62.5_f64)
        .unwrap();
    assert_eq!(seen.get(), 62.5);
}

#[test]
fn stepper_steps_are_integers() {
    let ctx = Context::new();
    let seen = Rc::new(Cell::new(0_i64));
    let sink = seen.clone();
    let node = stepper(0..=10, 4, move |value| sink.set(value))
        .step(2)
        .realize(&ctx);
    assert_eq!(node.get("step").and_then(Value::as_int), Some(2));
    ctx.invoke_with(handle_token(&node, "on-change"), 6_i64)
        .unwrap();
    assert_eq!(seen.get(), 6);
}

#[test]
fn label_realizes_as_the_single_child() {
    struct Label;
    impl View for Label {
        fn realize(&self, _ctx: &Context) -> HostNode {
            HostNode::new("label")
        }
    }
    let ctx = Context::new();
    let node = button(Label, || {}).realize(&ctx);
    assert_eq!(node.child_nodes().len(), 1);
    assert_eq!(node.child_nodes()[0].kind(), "label");
}
