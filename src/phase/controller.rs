//! Game controller
//!
//! The `GameController` is the single writer of [`GameState`]. It enforces
//! the activation order, owns the deferred link auto-advance, and saves the
//! persisted subset after every accepted command.
//!
//! Commands never fail: they return `true` when accepted and `false` when
//! rejected, and a rejected command leaves the state untouched.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::ControllerError;
use crate::observability::{Event, EventEmitter};
use crate::persist::StateStore;

use super::state::{GameState, NodeId, PersistedState, Phase};

/// Finite-state controller for the ghost reveal sequence.
///
/// Construct one per application run and share it by reference (or
/// `Arc`). Dropping the controller cancels any pending auto-advance.
pub struct GameController {
    shared: Arc<Shared>,
}

/// State shared with the auto-advance task.
struct Shared {
    /// Game state and the timer handle, guarded together so a command
    /// and the timer can never interleave.
    core: Mutex<Core>,
    /// Publishes a full snapshot after every accepted mutation
    updates: watch::Sender<GameState>,
    store: Arc<dyn StateStore>,
    storage_key: String,
    link_advance_delay: Duration,
    /// Runtime the auto-advance task is spawned on
    runtime: Handle,
    events: Option<Arc<EventEmitter>>,
}

struct Core {
    state: GameState,
    /// At most one outstanding link auto-advance
    pending: Option<PendingAdvance>,
}

/// Handle to a scheduled link auto-advance.
struct PendingAdvance {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl PendingAdvance {
    /// Cancels the task. Must be called with the core lock held so the
    /// task observes the cancellation before it can apply its effect.
    fn cancel(self) {
        self.cancel.cancel();
        self.task.abort();
    }
}

impl GameController {
    /// Creates a controller, restoring progress from `store`.
    ///
    /// Unreadable or malformed stored state falls back to the initial
    /// state. A restored `awaiting_first_link` phase gets a fresh
    /// auto-advance timer.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::NoRuntime` when called outside a tokio
    /// runtime.
    pub fn new(
        config: &GameConfig,
        store: Arc<dyn StateStore>,
        events: Option<Arc<EventEmitter>>,
    ) -> Result<Self, ControllerError> {
        let runtime = Handle::try_current().map_err(|_| ControllerError::NoRuntime)?;
        let state = restore_state(store.as_ref(), &config.storage_key);
        let (updates, _) = watch::channel(state.clone());

        let shared = Arc::new(Shared {
            core: Mutex::new(Core {
                state,
                pending: None,
            }),
            updates,
            store,
            storage_key: config.storage_key.clone(),
            link_advance_delay: config.link_advance_delay,
            runtime,
            events,
        });

        {
            let mut core = shared.lock();
            info!(phase = %core.state.phase, nodes = %core.state.activated_nodes, "game state restored");
            if core.state.phase == Phase::AwaitingFirstLink {
                debug!("rescheduling link auto-advance after restore");
                shared.schedule_link_advance(&mut core);
            }
        }

        Ok(Self { shared })
    }

    /// Activates the link glyph.
    ///
    /// Accepted only from `idle`: enters `awaiting_first_link`, shows the
    /// link, and schedules the auto-advance to `node1_active`. Repeated
    /// hover/focus triggers are rejected.
    pub fn activate_link(&self) -> bool {
        let mut core = self.shared.lock();
        let from = core.state.phase;
        if from != Phase::Idle {
            debug!(phase = %from, "link activation rejected");
            return false;
        }

        core.state.phase = Phase::AwaitingFirstLink;
        core.state.link_visible = true;
        core.state.last_activation = None;
        self.shared.schedule_link_advance(&mut core);

        info!(from = %from, to = %core.state.phase, reason = "link", "phase transition");
        self.shared.commit(&core);
        self.shared.emit(Event::PhaseEntered {
            timestamp: Utc::now(),
            phase: core.state.phase,
            reason: "link".to_owned(),
        });
        true
    }

    /// Activates `node`.
    ///
    /// Accepted only when `node` is the expected node for the current
    /// phase and has not been activated yet. Cancels a pending link
    /// auto-advance, records the node, and advances the phase, except that
    /// the terminal phase is never entered here: that is left to
    /// [`reveal`](Self::reveal).
    pub fn activate_node(&self, node: NodeId) -> bool {
        let mut core = self.shared.lock();
        let from = core.state.phase;
        if from.expected_node() != Some(node) || !core.state.activated_nodes.push(node) {
            debug!(%node, phase = %from, "node activation rejected");
            return false;
        }

        if let Some(pending) = core.pending.take() {
            pending.cancel();
            debug!("link auto-advance cancelled by manual activation");
        }

        core.state.last_activation = Some(node);
        core.state.phase = match from.successor() {
            Some(next) if !next.is_terminal() => next,
            _ => from,
        };

        info!(%node, from = %from, to = %core.state.phase, reason = "node", "phase transition");
        self.shared.commit(&core);
        let timestamp = Utc::now();
        self.shared.emit(Event::NodeActivated { timestamp, node });
        if core.state.phase != from {
            self.shared.emit(Event::PhaseEntered {
                timestamp,
                phase: core.state.phase,
                reason: format!("node {node}"),
            });
        }
        true
    }

    /// Enters the terminal phase.
    ///
    /// Accepted once per cycle, from the final pre-terminal phase.
    pub fn reveal(&self) -> bool {
        let mut core = self.shared.lock();
        let from = core.state.phase;
        let ready = from.successor().is_some_and(Phase::is_terminal);
        if !ready || core.state.revealed {
            debug!(phase = %from, revealed = core.state.revealed, "reveal rejected");
            return false;
        }

        core.state.phase = Phase::Revealed;
        core.state.revealed = true;

        info!(from = %from, to = %core.state.phase, reason = "reveal", "phase transition");
        self.shared.commit(&core);
        self.shared.emit(Event::Revealed {
            timestamp: Utc::now(),
        });
        true
    }

    /// Cancels any pending auto-advance and restores every field to its
    /// initial value.
    pub fn reset(&self) {
        let mut core = self.shared.lock();
        if let Some(pending) = core.pending.take() {
            pending.cancel();
        }
        let from = core.state.phase;
        core.state = GameState::default();

        info!(from = %from, "game reset");
        self.shared.commit(&core);
        self.shared.emit(Event::Reset {
            timestamp: Utc::now(),
        });
    }

    /// Sets the audio preference. Independent of the phase machine.
    pub fn set_muted(&self, muted: bool) {
        let mut core = self.shared.lock();
        core.state.muted = muted;

        debug!(muted, "audio preference set");
        self.shared.commit(&core);
        self.shared.emit(Event::MuteChanged {
            timestamp: Utc::now(),
            muted,
        });
    }

    /// Returns a consistent copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.shared.lock().state.clone()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.shared.lock().state.phase
    }

    /// Subscribes to state changes.
    ///
    /// The receiver holds the latest snapshot and is notified after every
    /// accepted command and every auto-advance.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.shared.updates.subscribe()
    }

    /// Returns whether a link auto-advance is outstanding.
    #[must_use]
    pub fn has_pending_advance(&self) -> bool {
        self.shared.lock().pending.is_some()
    }

    /// Cancels the pending auto-advance, if any.
    ///
    /// Call at application teardown; the state itself is left as is.
    pub fn shutdown(&self) {
        if let Some(pending) = self.shared.lock().pending.take() {
            pending.cancel();
            debug!("link auto-advance cancelled at shutdown");
        }
    }
}

impl Drop for GameController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let core = self.shared.lock();
        f.debug_struct("GameController")
            .field("phase", &core.state.phase)
            .field("activated_nodes", &core.state.activated_nodes)
            .field("pending_advance", &core.pending.is_some())
            .finish_non_exhaustive()
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Core> {
        // Every mutation assigns whole fields, so a poisoned guard still
        // holds a consistent state.
        self.core.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces any pending auto-advance with a fresh one.
    fn schedule_link_advance(self: &Arc<Self>, core: &mut Core) {
        if let Some(previous) = core.pending.take() {
            previous.cancel();
        }

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let shared = Arc::clone(self);
        let delay = self.link_advance_delay;
        let task = self.runtime.spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = tokio::time::sleep(delay) => shared.fire_link_advance(&token),
            }
        });

        debug!(delay_ms = delay.as_millis(), "link auto-advance scheduled");
        core.pending = Some(PendingAdvance { cancel, task });
    }

    /// Applies the link auto-advance if it is still current.
    fn fire_link_advance(&self, token: &CancellationToken) {
        let mut core = self.lock();
        // Cancellation always happens under the lock, so this check cannot
        // race with a reset or a manual activation.
        if token.is_cancelled() {
            return;
        }
        core.pending = None;

        let from = core.state.phase;
        if from != Phase::AwaitingFirstLink {
            return;
        }
        core.state.phase = Phase::Node1Active;

        info!(from = %from, to = %core.state.phase, reason = "auto_advance", "phase transition");
        self.commit(&core);
        self.emit(Event::PhaseEntered {
            timestamp: Utc::now(),
            phase: core.state.phase,
            reason: "auto_advance".to_owned(),
        });
    }

    /// Saves the persisted subset and publishes the new snapshot.
    ///
    /// The store write is blocking and happens under the core lock, also
    /// when called from the auto-advance task. Persisted documents are a
    /// few hundred bytes.
    fn commit(&self, core: &Core) {
        match serde_json::to_string(&core.state.persisted()) {
            Ok(json) => {
                if let Err(e) = self.store.save(&self.storage_key, &json) {
                    warn!(error = %e, key = %self.storage_key, "failed to save game state");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize game state"),
        }
        self.updates.send_replace(core.state.clone());
    }

    fn emit(&self, event: Event) {
        if let Some(events) = &self.events {
            events.emit(event);
        }
    }
}

/// Loads the game state stored under `key`, falling back to the initial
/// state when the value is absent, unreadable or malformed.
#[must_use]
pub fn restore_state(store: &dyn StateStore, key: &str) -> GameState {
    match store.load(key) {
        Ok(Some(json)) => match serde_json::from_str::<PersistedState>(&json) {
            Ok(persisted) => persisted.rehydrate().unwrap_or_else(|e| {
                warn!(error = %e, key, "discarding inconsistent stored game state");
                GameState::default()
            }),
            Err(e) => {
                warn!(error = %e, key, "discarding malformed stored game state");
                GameState::default()
            }
        },
        Ok(None) => {
            debug!(key, "no stored game state");
            GameState::default()
        }
        Err(e) => {
            warn!(error = %e, key, "failed to read stored game state");
            GameState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;
    use crate::phase::ActivationRecord;

    const DELAY: Duration = Duration::from_millis(1200);

    fn config() -> GameConfig {
        GameConfig {
            link_advance_delay: DELAY,
            ..GameConfig::default()
        }
    }

    fn controller() -> (GameController, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let controller = GameController::new(&config(), store.clone(), None).unwrap();
        (controller, store)
    }

    fn stored(store: &MemoryStore) -> Option<PersistedState> {
        store
            .load("ghost-machine-state")
            .unwrap()
            .map(|json| serde_json::from_str(&json).unwrap())
    }

    fn record(nodes: &[NodeId]) -> ActivationRecord {
        ActivationRecord::try_from(nodes.to_vec()).unwrap()
    }

    /// Drives a fresh controller into `phase` without waiting on the timer.
    fn drive_to(controller: &GameController, phase: Phase) {
        let steps: &[fn(&GameController) -> bool] = &[
            GameController::activate_link,
            |c| c.activate_node(NodeId::One),
            |c| c.activate_node(NodeId::Two),
            |c| c.activate_node(NodeId::Three),
            GameController::reveal,
        ];
        for step in steps {
            if controller.phase() == phase {
                return;
            }
            assert!(step(controller));
        }
        assert_eq!(controller.phase(), phase);
    }

    #[tokio::test]
    async fn starts_idle() {
        let (controller, store) = controller();
        assert_eq!(controller.snapshot(), GameState::default());
        assert!(!controller.has_pending_advance());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn activate_link_once() {
        let (controller, store) = controller();
        assert!(controller.activate_link());

        let state = controller.snapshot();
        assert_eq!(state.phase, Phase::AwaitingFirstLink);
        assert!(state.link_visible);
        assert_eq!(state.last_activation, None);
        assert!(controller.has_pending_advance());
        assert_eq!(stored(&store).unwrap().phase, Phase::AwaitingFirstLink);

        assert!(!controller.activate_link());
    }

    #[tokio::test]
    async fn activate_link_rejected_outside_idle() {
        for phase in &Phase::ALL[1..] {
            let (controller, _store) = controller();
            drive_to(&controller, *phase);
            let before = controller.snapshot();
            assert!(!controller.activate_link(), "accepted in {phase}");
            assert_eq!(controller.snapshot(), before);
        }
    }

    #[tokio::test]
    async fn nodes_must_follow_expected_order() {
        let (controller, _store) = controller();
        assert!(!controller.activate_node(NodeId::One), "idle accepts no node");

        controller.activate_link();
        assert!(!controller.activate_node(NodeId::Two));
        assert!(!controller.activate_node(NodeId::Three));
        assert!(controller.snapshot().activated_nodes.is_empty());

        assert!(controller.activate_node(NodeId::One));
        assert_eq!(controller.phase(), Phase::Node1Active);
        assert!(!controller.activate_node(NodeId::One));
        assert!(!controller.activate_node(NodeId::Three));

        assert!(controller.activate_node(NodeId::Two));
        assert_eq!(controller.phase(), Phase::Node2Active);
        assert_eq!(controller.snapshot().last_activation, Some(NodeId::Two));
    }

    #[tokio::test]
    async fn final_node_holds_before_terminal_phase() {
        let (controller, _store) = controller();
        drive_to(&controller, Phase::Node2Active);

        assert!(controller.activate_node(NodeId::Three));
        let state = controller.snapshot();
        assert_eq!(state.phase, Phase::Node3Active);
        assert!(!state.revealed);
        assert_eq!(
            state.activated_nodes,
            record(&[NodeId::One, NodeId::Two, NodeId::Three])
        );
        assert!(!controller.activate_node(NodeId::Three));
    }

    #[tokio::test]
    async fn reveal_succeeds_once_per_cycle() {
        let (controller, _store) = controller();
        assert!(!controller.reveal());

        drive_to(&controller, Phase::Node2Active);
        assert!(!controller.reveal(), "reveal before final node");

        controller.activate_node(NodeId::Three);
        assert!(controller.reveal());
        let state = controller.snapshot();
        assert_eq!(state.phase, Phase::Revealed);
        assert!(state.revealed);

        assert!(!controller.reveal());

        controller.reset();
        drive_to(&controller, Phase::Revealed);
        assert!(controller.snapshot().revealed);
    }

    #[tokio::test(start_paused = true)]
    async fn link_auto_advances_after_delay() {
        let (controller, store) = controller();
        controller.activate_link();

        tokio::time::sleep(DELAY - Duration::from_millis(1)).await;
        assert_eq!(controller.phase(), Phase::AwaitingFirstLink);

        tokio::time::sleep(Duration::from_millis(10)).await;
        let state = controller.snapshot();
        assert_eq!(state.phase, Phase::Node1Active);
        assert!(state.activated_nodes.is_empty());
        assert!(!controller.has_pending_advance());
        assert_eq!(stored(&store).unwrap().phase, Phase::Node1Active);

        // node 1 is no longer expected once the timer has advanced
        assert!(!controller.activate_node(NodeId::One));
        assert!(controller.activate_node(NodeId::Two));
    }

    #[tokio::test(start_paused = true)]
    async fn manual_activation_cancels_auto_advance() {
        let (controller, _store) = controller();
        let mut updates = controller.subscribe();
        controller.activate_link();
        assert!(controller.activate_node(NodeId::One));
        assert!(!controller.has_pending_advance());
        assert!(controller.activate_node(NodeId::Two));
        updates.mark_unchanged();

        tokio::time::sleep(DELAY * 3).await;
        assert_eq!(controller.phase(), Phase::Node2Active);
        assert!(!updates.has_changed().unwrap(), "cancelled timer published a change");
    }

    #[tokio::test(start_paused = true)]
    async fn reset_cancels_auto_advance() {
        let (controller, store) = controller();
        controller.set_muted(true);
        controller.activate_link();
        controller.reset();

        assert_eq!(controller.snapshot(), GameState::default());
        assert!(!controller.has_pending_advance());

        tokio::time::sleep(DELAY * 3).await;
        assert_eq!(controller.snapshot(), GameState::default());
        assert_eq!(stored(&store).unwrap(), PersistedState::default());
    }

    #[tokio::test]
    async fn reset_from_every_reachable_phase() {
        for phase in Phase::ALL {
            let (controller, _store) = controller();
            controller.set_muted(true);
            drive_to(&controller, phase);
            controller.reset();
            assert_eq!(controller.snapshot(), GameState::default(), "from {phase}");
        }
    }

    #[tokio::test]
    async fn mute_is_independent_of_phase() {
        let (controller, store) = controller();
        controller.set_muted(true);
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(controller.snapshot().muted);
        assert!(stored(&store).unwrap().muted);

        drive_to(&controller, Phase::Revealed);
        controller.set_muted(false);
        assert_eq!(controller.phase(), Phase::Revealed);
        assert!(!controller.snapshot().muted);
    }

    #[tokio::test]
    async fn rejected_commands_do_not_save() {
        let (controller, store) = controller();
        controller.activate_link();
        store.remove("ghost-machine-state").unwrap();

        assert!(!controller.activate_link());
        assert!(!controller.activate_node(NodeId::Three));
        assert!(!controller.reveal());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn restore_after_full_sequence() {
        let store = Arc::new(MemoryStore::new());
        {
            let controller = GameController::new(&config(), store.clone(), None).unwrap();
            drive_to(&controller, Phase::Revealed);
        }

        let restored = GameController::new(&config(), store.clone(), None).unwrap();
        let state = restored.snapshot();
        assert_eq!(state.phase, Phase::Revealed);
        assert!(state.revealed);
        assert_eq!(
            state.activated_nodes,
            record(&[NodeId::One, NodeId::Two, NodeId::Three])
        );
        assert_eq!(state.last_activation, None);
    }

    #[tokio::test]
    async fn restore_repairs_revealed_flag() {
        let store = Arc::new(MemoryStore::new());
        store
            .save(
                "ghost-machine-state",
                r#"{"phase":"revealed","activatedNodes":[1,2,3],"linkVisible":true,"revealed":false,"muted":true}"#,
            )
            .unwrap();

        let controller = GameController::new(&config(), store, None).unwrap();
        let state = controller.snapshot();
        assert!(state.revealed);
        assert!(state.muted);
        assert!(!controller.reveal());
    }

    #[tokio::test(start_paused = true)]
    async fn restore_reschedules_pending_auto_advance() {
        let store = Arc::new(MemoryStore::new());
        store
            .save(
                "ghost-machine-state",
                r#"{"phase":"awaiting_first_link","activatedNodes":[],"linkVisible":true,"revealed":false,"muted":false}"#,
            )
            .unwrap();

        let controller = GameController::new(&config(), store, None).unwrap();
        assert!(controller.has_pending_advance());

        tokio::time::sleep(DELAY + Duration::from_millis(10)).await;
        assert_eq!(controller.phase(), Phase::Node1Active);
    }

    #[tokio::test]
    async fn malformed_stored_state_falls_back_to_defaults() {
        let cases = [
            "not json",
            r#"{"phase":"haunted"}"#,
            r#"{"phase":"node2_active","activatedNodes":[1,1],"linkVisible":true,"revealed":false,"muted":false}"#,
            r#"{"phase":"node1_active","activatedNodes":[4],"linkVisible":true,"revealed":false,"muted":false}"#,
            r#"{"phase":"node2_active","activatedNodes":[3],"linkVisible":true,"revealed":false,"muted":false}"#,
            r#"{"phase":"revealed","activatedNodes":[],"linkVisible":true,"revealed":true,"muted":false}"#,
            r#"{"phase":"idle","activatedNodes":[1],"linkVisible":false,"revealed":false,"muted":false}"#,
        ];
        for json in cases {
            let store = Arc::new(MemoryStore::new());
            store.save("ghost-machine-state", json).unwrap();
            let controller = GameController::new(&config(), store, None).unwrap();
            assert_eq!(controller.snapshot(), GameState::default(), "{json}");
        }
    }

    #[tokio::test]
    async fn subscribers_see_whole_snapshots() {
        let (controller, _store) = controller();
        let mut updates = controller.subscribe();

        controller.activate_link();
        controller.activate_node(NodeId::One);
        updates.changed().await.unwrap();

        let seen = updates.borrow_and_update().clone();
        assert_eq!(seen, controller.snapshot());
        assert_eq!(seen.last_activation, Some(NodeId::One));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_controller_cancels_auto_advance() {
        let store = Arc::new(MemoryStore::new());
        let controller = GameController::new(&config(), store.clone(), None).unwrap();
        controller.activate_link();
        drop(controller);

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(stored(&store).unwrap().phase, Phase::AwaitingFirstLink);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_activation_only_one_wins() {
        let (controller, _store) = controller();
        controller.activate_link();
        let controller = Arc::new(controller);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let c = Arc::clone(&controller);
                std::thread::spawn(move || c.activate_node(NodeId::One))
            })
            .collect();
        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&won| won)
            .count();

        assert_eq!(wins, 1);
        assert_eq!(controller.snapshot().activated_nodes, record(&[NodeId::One]));
    }

    #[tokio::test]
    async fn events_follow_accepted_commands() {
        use std::io::Write;
        use std::sync::Mutex as StdMutex;

        #[derive(Clone)]
        struct Sink(Arc<StdMutex<Vec<u8>>>);
        impl Write for Sink {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let sink = Sink(Arc::new(StdMutex::new(Vec::new())));
        let emitter = Arc::new(EventEmitter::new(Box::new(sink.clone())));
        let controller =
            GameController::new(&config(), Arc::new(MemoryStore::new()), Some(emitter.clone()))
                .unwrap();

        controller.activate_link();
        controller.activate_node(NodeId::Two);
        controller.activate_node(NodeId::One);

        let output = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        let types: Vec<String> = output
            .lines()
            .map(|l| {
                let value: serde_json::Value = serde_json::from_str(l).unwrap();
                value["type"].as_str().unwrap().to_owned()
            })
            .collect();
        assert_eq!(types, ["PhaseEntered", "NodeActivated", "PhaseEntered"]);
        assert_eq!(emitter.event_count(), 3);
    }

    #[test]
    fn requires_a_runtime() {
        let result = GameController::new(&config(), Arc::new(MemoryStore::new()), None);
        assert!(matches!(result, Err(ControllerError::NoRuntime)));
    }
}
