//! Application shell: state, event handling, and action dispatch around the
//! quiz session controller.

pub mod action;
pub mod event;
pub mod handler;
pub mod state;
