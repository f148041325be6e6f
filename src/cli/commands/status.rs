//! `status` command: show persisted progress.

use serde::Serialize;

use crate::cli::args::{OutputFormat, StatusArgs};
use crate::config::GameConfig;
use crate::error::GhostwakeError;
use crate::phase::{GameState, NodeId, PersistedState, restore_state};
use crate::view::{self, NodeStatus};

use super::existing_store;

/// JSON shape printed by `status --format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport {
    #[serde(flatten)]
    state: PersistedState,
    caption: &'static str,
    nodes: Vec<NodeReport>,
    completed: bool,
}

#[derive(Debug, Serialize)]
struct NodeReport {
    node: NodeId,
    label: &'static str,
    status: NodeStatus,
    visible: bool,
}

fn report(state: &GameState) -> StatusReport {
    StatusReport {
        state: state.persisted(),
        caption: view::phase_caption(state.phase),
        nodes: NodeId::ALL
            .iter()
            .map(|&node| NodeReport {
                node,
                label: view::node_label(node),
                status: view::node_status(node, state),
                visible: view::is_node_visible(node, state),
            })
            .collect(),
        completed: view::has_completed_sequence(&state.activated_nodes),
    }
}

/// Prints the persisted game state after applying the restore repairs.
///
/// # Errors
///
/// Returns an error if the stored value cannot be read or JSON output fails.
pub fn run(args: &StatusArgs, config: &GameConfig) -> Result<(), GhostwakeError> {
    let store = existing_store(config);
    let state = restore_state(store.as_ref(), &config.storage_key);

    match args.format {
        OutputFormat::Human => {
            println!("{}", view::status_line(&state));
            for node in NodeId::ALL {
                println!(
                    "  node {node} ({}): {}",
                    view::node_label(node),
                    view::node_status(node, &state)
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report(&state))?);
        }
    }
    Ok(())
}
