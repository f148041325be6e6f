//! `ghostwake` - phase controller for a gesture-driven ghost reveal
//!
//! This library provides the state machine that orders player gestures
//! (a link activation, three node activations, a reveal), its deferred
//! auto-advance, persistence backends, and a terminal presentation layer.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod persist;
pub mod phase;
pub mod view;
