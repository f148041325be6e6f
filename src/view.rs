//! Presentation helpers
//!
//! Read-only projections of [`GameState`] used by presentation layers:
//! which nodes are visible or armed, and the captions shown to the player.

use serde::Serialize;

use crate::phase::{ActivationRecord, GameState, NodeId, Phase};

/// How a node should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    /// Not yet reachable.
    Locked,
    /// The next node the player may activate.
    Armed,
    /// Already activated.
    Activated,
}

impl std::fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Locked => "locked",
            Self::Armed => "armed",
            Self::Activated => "activated",
        })
    }
}

/// Returns the display status of `node` for `state`.
#[must_use]
pub fn node_status(node: NodeId, state: &GameState) -> NodeStatus {
    if state.activated_nodes.contains(node) {
        NodeStatus::Activated
    } else if state.phase.expected_node() == Some(node) {
        NodeStatus::Armed
    } else {
        NodeStatus::Locked
    }
}

/// Returns whether `node` has surfaced for the player.
///
/// Node 1 appears with the link, node 2 once the first node phase is
/// reached, node 3 once the second is reached. Activated nodes always
/// stay visible.
#[must_use]
pub fn is_node_visible(node: NodeId, state: &GameState) -> bool {
    if state.activated_nodes.contains(node) {
        return true;
    }
    let first_phase = match node {
        NodeId::One => Phase::AwaitingFirstLink,
        NodeId::Two => Phase::Node1Active,
        NodeId::Three => Phase::Node2Active,
    };
    phase_rank(state.phase) >= phase_rank(first_phase)
}

fn phase_rank(phase: Phase) -> usize {
    Phase::ALL.iter().position(|p| *p == phase).unwrap_or(0)
}

/// Returns whether every node has been activated.
#[must_use]
pub fn has_completed_sequence(record: &ActivationRecord) -> bool {
    record.is_complete()
}

/// Short caption for the status HUD.
#[must_use]
pub const fn phase_caption(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "standby",
        Phase::AwaitingFirstLink => "link established",
        Phase::Node1Active => "node alpha engaged",
        Phase::Node2Active => "node beta engaged",
        Phase::Node3Active => "omega pending",
        Phase::Revealed => "ghost online",
    }
}

/// Name of a node as shown to the player.
#[must_use]
pub const fn node_label(node: NodeId) -> &'static str {
    match node {
        NodeId::One => "alpha",
        NodeId::Two => "beta",
        NodeId::Three => "omega",
    }
}

/// `nodes active: 2/3 (1, 2)`
#[must_use]
pub fn nodes_line(record: &ActivationRecord) -> String {
    format!(
        "nodes active: {}/{} ({record})",
        record.len(),
        ActivationRecord::CAPACITY
    )
}

/// One-line HUD rendering of the whole state.
#[must_use]
pub fn status_line(state: &GameState) -> String {
    format!(
        "status: {} | {} | {} | {}",
        phase_caption(state.phase),
        nodes_line(&state.activated_nodes),
        if state.revealed { "ghost awake" } else { "ghost idle" },
        if state.muted { "audio muted" } else { "audio live" },
    )
}
