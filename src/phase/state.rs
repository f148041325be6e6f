//! Game state representation
//!
//! Phase ordering, node identifiers, the activation record, and the
//! persisted subset of the game state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discrete state of the activation sequence.
///
/// Phases advance strictly forward through [`Phase::successor`];
/// only a reset returns to [`Phase::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing has happened yet.
    #[default]
    Idle,
    /// The link glyph was activated; node 1 is armed.
    AwaitingFirstLink,
    /// Node 2 is armed.
    Node1Active,
    /// Node 3 is armed.
    Node2Active,
    /// All nodes are consumed; waiting for the reveal.
    Node3Active,
    /// The ghost is awake. Terminal.
    Revealed,
}

impl Phase {
    /// Every phase in sequence order.
    pub const ALL: [Self; 6] = [
        Self::Idle,
        Self::AwaitingFirstLink,
        Self::Node1Active,
        Self::Node2Active,
        Self::Node3Active,
        Self::Revealed,
    ];

    /// Returns the phase that follows this one, or `None` for the terminal phase.
    #[must_use]
    pub const fn successor(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::AwaitingFirstLink),
            Self::AwaitingFirstLink => Some(Self::Node1Active),
            Self::Node1Active => Some(Self::Node2Active),
            Self::Node2Active => Some(Self::Node3Active),
            Self::Node3Active => Some(Self::Revealed),
            Self::Revealed => None,
        }
    }

    /// Returns the only node accepted for activation in this phase.
    #[must_use]
    pub const fn expected_node(self) -> Option<NodeId> {
        match self {
            Self::AwaitingFirstLink => Some(NodeId::One),
            Self::Node1Active => Some(NodeId::Two),
            Self::Node2Active => Some(NodeId::Three),
            Self::Idle | Self::Node3Active | Self::Revealed => None,
        }
    }

    /// Number of nodes consumed on the way into this phase.
    #[must_use]
    pub const fn consumed_nodes(self) -> usize {
        match self {
            Self::Idle | Self::AwaitingFirstLink => 0,
            Self::Node1Active => 1,
            Self::Node2Active => 2,
            Self::Node3Active | Self::Revealed => 3,
        }
    }

    /// Returns whether this is the terminal phase.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.successor().is_none()
    }

    /// Stable snake_case name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingFirstLink => "awaiting_first_link",
            Self::Node1Active => "node1_active",
            Self::Node2Active => "node2_active",
            Self::Node3Active => "node3_active",
            Self::Revealed => "revealed",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an integer outside `1..=3` is offered as a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid node id {0} (expected 1, 2 or 3)")]
pub struct InvalidNodeId(pub u8);

/// One of the three orderable activation targets.
///
/// Serialized as the bare integer `1`, `2` or `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum NodeId {
    /// Node alpha
    One = 1,
    /// Node beta
    Two = 2,
    /// Node omega
    Three = 3,
}

impl NodeId {
    /// All nodes in activation order.
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// The node whose activation completes the sequence.
    pub const FINAL: Self = Self::Three;

    /// Numeric form of the node.
    #[must_use]
    pub const fn get(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for NodeId {
    type Error = InvalidNodeId;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(InvalidNodeId(other)),
        }
    }
}

impl From<NodeId> for u8 {
    fn from(node: NodeId) -> Self {
        node.get()
    }
}

impl std::str::FromStr for NodeId {
    type Err = InvalidNodeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s.trim().parse().map_err(|_| InvalidNodeId(0))?;
        Self::try_from(value)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Returned when a node list cannot form an [`ActivationRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The same node appears twice.
    #[error("node {0} recorded more than once")]
    Duplicate(NodeId),
    /// More nodes than exist.
    #[error("activation record holds {0} nodes (at most 3)")]
    TooLong(usize),
    /// The record could not have been produced on the way to the phase.
    #[error("activation record [{record}] does not fit phase {phase}")]
    PhaseMismatch {
        /// Stored phase
        phase: Phase,
        /// Stored record
        record: ActivationRecord,
    },
}

/// Append-only, duplicate-free record of activated nodes in activation order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<NodeId>", into = "Vec<NodeId>")]
pub struct ActivationRecord(Vec<NodeId>);

impl ActivationRecord {
    /// Maximum number of recorded nodes.
    pub const CAPACITY: usize = NodeId::ALL.len();

    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `node` unless it is already recorded or the record is full.
    ///
    /// Returns `true` if the node was appended.
    pub fn push(&mut self, node: NodeId) -> bool {
        if self.contains(node) || self.0.len() >= Self::CAPACITY {
            return false;
        }
        self.0.push(node);
        true
    }

    /// Returns whether `node` has been activated.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.0.contains(&node)
    }

    /// Number of recorded nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no node has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether every node has been recorded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.len() == Self::CAPACITY
    }

    /// Returns whether this record can have been produced on the way to
    /// `phase`.
    ///
    /// Every node consumed by `phase` is recorded in order, except that
    /// node 1 is absent when the link auto-advance moved past it.
    #[must_use]
    pub fn fits_phase(&self, phase: Phase) -> bool {
        let consumed = &NodeId::ALL[..phase.consumed_nodes()];
        self.0 == consumed || consumed.get(1..).is_some_and(|skipped| self.0 == skipped)
    }

    /// Recorded nodes in activation order.
    #[must_use]
    pub fn as_slice(&self) -> &[NodeId] {
        &self.0
    }
}

impl TryFrom<Vec<NodeId>> for ActivationRecord {
    type Error = RecordError;

    fn try_from(nodes: Vec<NodeId>) -> Result<Self, Self::Error> {
        if nodes.len() > Self::CAPACITY {
            return Err(RecordError::TooLong(nodes.len()));
        }
        let mut record = Self::new();
        for node in nodes {
            if !record.push(node) {
                return Err(RecordError::Duplicate(node));
            }
        }
        Ok(record)
    }
}

impl From<ActivationRecord> for Vec<NodeId> {
    fn from(record: ActivationRecord) -> Self {
        record.0
    }
}

impl std::fmt::Display for ActivationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }
        for (i, node) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

/// The complete mutable game state.
///
/// Owned by the controller; everything else sees cloned snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    /// Current phase
    pub phase: Phase,
    /// Nodes activated so far, in order
    pub activated_nodes: ActivationRecord,
    /// Whether the link glyph has surfaced the rest of the interaction
    pub link_visible: bool,
    /// Whether the ghost has been revealed
    pub revealed: bool,
    /// Most recently activated node, for one-shot UI effects
    pub last_activation: Option<NodeId>,
    /// Audio preference
    pub muted: bool,
}

impl GameState {
    /// Extracts the subset of fields that survives a restart.
    #[must_use]
    pub fn persisted(&self) -> PersistedState {
        PersistedState {
            phase: self.phase,
            activated_nodes: self.activated_nodes.clone(),
            link_visible: self.link_visible,
            revealed: self.revealed,
            muted: self.muted,
        }
    }
}

/// The persisted subset of [`GameState`].
///
/// Excludes `last_activation` and any pending timer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    /// Current phase
    pub phase: Phase,
    /// Nodes activated so far, in order
    pub activated_nodes: ActivationRecord,
    /// Whether the link glyph is visible
    pub link_visible: bool,
    /// Whether the ghost has been revealed
    pub revealed: bool,
    /// Audio preference
    pub muted: bool,
}

impl PersistedState {
    /// Rebuilds a full game state, repairing fields that may have been
    /// captured mid-transition.
    ///
    /// `revealed` is derived from the phase, and the link is visible in
    /// every phase after `idle`.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhaseMismatch` when the activation record does
    /// not fit the phase. Such a state cannot be repaired.
    pub fn rehydrate(self) -> Result<GameState, RecordError> {
        if !self.activated_nodes.fits_phase(self.phase) {
            return Err(RecordError::PhaseMismatch {
                phase: self.phase,
                record: self.activated_nodes,
            });
        }
        Ok(GameState {
            phase: self.phase,
            activated_nodes: self.activated_nodes,
            link_visible: self.link_visible || self.phase != Phase::Idle,
            revealed: self.phase == Phase::Revealed,
            last_activation: None,
            muted: self.muted,
        })
    }
}
