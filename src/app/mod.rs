//! Core application logic: widget state, event handling, and action dispatch.

pub mod action;
#[cfg(test)]
pub mod clock;
pub mod event;
pub mod handler;
pub mod help;
pub mod keymap;
pub mod sink;
pub mod spin;
pub mod state;
pub mod widget;
