//! Phase state machine
//!
//! Drives the ghost reveal sequence: a link activation, three ordered node
//! activations, and an explicit reveal.
//!
//! # Architecture
//!
//! - [`Phase`], [`NodeId`], [`ActivationRecord`], [`GameState`]: the data model
//! - [`PersistedState`]: the subset of [`GameState`] that survives a restart
//! - [`GameController`]: the single writer, with the deferred link auto-advance

pub mod controller;
pub mod state;

pub use controller::{GameController, restore_state};
pub use state::{
    ActivationRecord, GameState, InvalidNodeId, NodeId, PersistedState, Phase, RecordError,
};
