//! `play` command: interactive terminal session.
//!
//! Reads one command per line from stdin and drives the game controller
//! the way the visual front end does: hover on the link glyph, click the
//! nodes, and reveal after a flourish once the final node lands.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cli::args::PlayArgs;
use crate::config::GameConfig;
use crate::error::GhostwakeError;
use crate::observability::{Event, EventEmitter};
use crate::phase::{GameController, NodeId, Phase};
use crate::view;

use super::open_store;

/// Greeting shown once per session, when the link first surfaces.
pub const INTRO_LINE: &str = "I see you.";

/// Words accepted as commands, used for typo suggestions.
const COMMAND_WORDS: &[&str] = &[
    "link", "node", "reveal", "reset", "mute", "status", "help", "quit",
];

/// A parsed session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Hover or focus the link glyph.
    Link,
    /// Click a node.
    Node(NodeId),
    /// Ask for the reveal directly.
    Reveal,
    /// Start over.
    Reset,
    /// Set (`Some`) or toggle (`None`) the audio preference.
    Mute(Option<bool>),
    /// Print the HUD.
    Status,
    /// Print the help text.
    Help,
    /// End the session.
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Blank line.
    #[error("empty command")]
    Empty,
    /// Unrecognized command word.
    #[error("unknown command: {input}{}", .suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
    Unknown {
        /// The word as typed
        input: String,
        /// Closest known command, if any
        suggestion: Option<String>,
    },
    /// Command word known, argument not.
    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Parses one input line.
///
/// # Errors
///
/// Returns `ParseError` for blank lines, unknown commands, or bad arguments.
pub fn parse_command(line: &str) -> Result<SessionCommand, ParseError> {
    let lowered = line.trim().to_lowercase();
    let mut words = lowered.split_whitespace();
    let Some(word) = words.next() else {
        return Err(ParseError::Empty);
    };
    let arg = words.next();
    if words.next().is_some() {
        return Err(usage_for(word));
    }

    match (word, arg) {
        ("link" | "hover", None) => Ok(SessionCommand::Link),
        ("node", Some(n)) => n
            .parse()
            .map(SessionCommand::Node)
            .map_err(|_| ParseError::Usage("node <1|2|3>")),
        ("reveal", None) => Ok(SessionCommand::Reveal),
        ("reset", None) => Ok(SessionCommand::Reset),
        ("mute", None) => Ok(SessionCommand::Mute(None)),
        ("mute", Some("on")) => Ok(SessionCommand::Mute(Some(true))),
        ("mute", Some("off")) => Ok(SessionCommand::Mute(Some(false))),
        ("status", None) => Ok(SessionCommand::Status),
        ("help", None) => Ok(SessionCommand::Help),
        ("quit" | "exit", None) => Ok(SessionCommand::Quit),
        _ => Err(usage_for(word)),
    }
}

fn usage_for(word: &str) -> ParseError {
    match word {
        "link" | "hover" => ParseError::Usage("link"),
        "node" => ParseError::Usage("node <1|2|3>"),
        "mute" => ParseError::Usage("mute [on|off]"),
        "reveal" | "reset" | "status" | "help" | "quit" | "exit" => ParseError::Usage("no arguments"),
        other => ParseError::Unknown {
            input: other.to_string(),
            suggestion: suggest_command(other),
        },
    }
}

/// Suggests the closest command word for a typo.
///
/// Returns the closest match if its Damerau-Levenshtein distance is ≤ 2.
#[must_use]
pub fn suggest_command(input: &str) -> Option<String> {
    COMMAND_WORDS
        .iter()
        .map(|w| (*w, strsim::damerau_levenshtein(input, w)))
        .filter(|(_, dist)| *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(word, _)| word.to_string())
}

/// A running terminal session.
///
/// Plays the presentation role: it reports command outcomes and schedules
/// the reveal once the final node has been activated.
pub struct Session {
    controller: Arc<GameController>,
    flourish: Duration,
    pending_reveal: Option<JoinHandle<bool>>,
    intro_shown: bool,
}

impl Session {
    /// Creates a session driving `controller`.
    #[must_use]
    pub const fn new(controller: Arc<GameController>, flourish: Duration) -> Self {
        Self {
            controller,
            flourish,
            pending_reveal: None,
            intro_shown: false,
        }
    }

    /// Returns the greeting the first time the link is seen visible.
    ///
    /// Also covers sessions restored past `idle`, where the link is
    /// already up when the session starts.
    pub fn intro(&mut self) -> Option<&'static str> {
        if self.intro_shown || !self.controller.snapshot().link_visible {
            return None;
        }
        self.intro_shown = true;
        Some(INTRO_LINE)
    }

    /// Applies `command` and returns the lines to print.
    pub fn handle(&mut self, command: SessionCommand) -> Vec<String> {
        match command {
            SessionCommand::Link => {
                if self.controller.activate_link() {
                    let mut lines = vec!["link established. the glyph is listening.".to_owned()];
                    lines.extend(self.intro().map(str::to_owned));
                    lines
                } else {
                    vec!["the link is already open.".to_owned()]
                }
            }
            SessionCommand::Node(node) => self.handle_node(node),
            SessionCommand::Reveal => {
                if self.controller.reveal() {
                    vec!["the ghost wakes.".to_owned()]
                } else {
                    vec!["the ghost stirs but does not wake.".to_owned()]
                }
            }
            SessionCommand::Reset => {
                self.cancel_reveal();
                self.controller.reset();
                vec!["experience reset. begin again.".to_owned()]
            }
            SessionCommand::Mute(muted) => {
                let muted = muted.unwrap_or(!self.controller.snapshot().muted);
                self.controller.set_muted(muted);
                vec![if muted { "audio muted" } else { "audio live" }.to_owned()]
            }
            SessionCommand::Status => {
                let state = self.controller.snapshot();
                vec![
                    view::status_line(&state),
                    view::nodes_line(&state.activated_nodes),
                ]
            }
            SessionCommand::Help => vec![
                "triangles awaken the ghost. find the sequence.".to_owned(),
                "commands: link, node <1|2|3>, reveal, reset, mute [on|off], status, help, quit"
                    .to_owned(),
            ],
            SessionCommand::Quit => Vec::new(),
        }
    }

    fn handle_node(&mut self, node: NodeId) -> Vec<String> {
        let label = view::node_label(node);
        if !self.controller.activate_node(node) {
            let status = view::node_status(node, &self.controller.snapshot());
            return vec![format!("node {label} does not respond ({status}).")];
        }

        let mut lines = vec![format!("node {label} engaged.")];
        if node == NodeId::FINAL {
            lines.push("omega locked. the ghost is gathering itself...".to_owned());
            self.schedule_reveal();
        }
        lines
    }

    /// Reveals after the flourish, replacing any earlier schedule.
    fn schedule_reveal(&mut self) {
        self.cancel_reveal();
        let controller = Arc::clone(&self.controller);
        let flourish = self.flourish;
        debug!(flourish_ms = flourish.as_millis(), "reveal scheduled");
        self.pending_reveal = Some(tokio::spawn(async move {
            tokio::time::sleep(flourish).await;
            controller.reveal()
        }));
    }

    fn cancel_reveal(&mut self) {
        if let Some(handle) = self.pending_reveal.take() {
            handle.abort();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cancel_reveal();
    }
}

/// Prints a line whenever the phase changes, including changes made by
/// the auto-advance and the scheduled reveal.
fn spawn_phase_watcher(controller: &GameController) -> JoinHandle<()> {
    let mut updates = controller.subscribe();
    tokio::spawn(async move {
        let mut last = updates.borrow_and_update().phase;
        while updates.changed().await.is_ok() {
            let phase = updates.borrow_and_update().phase;
            if phase != last {
                println!("[{}] {}", phase, view::phase_caption(phase));
                if phase == Phase::Revealed {
                    println!("ghost awake.");
                }
                last = phase;
            }
        }
    })
}

/// Runs an interactive session until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if the store or event file cannot be opened, or if
/// stdin cannot be read.
pub async fn run(args: &PlayArgs, mut config: GameConfig) -> Result<(), GhostwakeError> {
    if let Some(delay) = args.link_delay {
        config.link_advance_delay = delay;
    }
    if let Some(delay) = args.reveal_delay {
        config.reveal_flourish = delay;
        config.reduced_motion_flourish = delay;
    }

    let store = open_store(&config, args.ephemeral)?;
    let events = match &args.events {
        Some(path) => Some(Arc::new(EventEmitter::from_file(path)?)),
        None => None,
    };

    let controller = Arc::new(GameController::new(&config, store, events.clone())?);
    let restored = controller.phase();
    if let Some(events) = &events {
        events.emit(Event::SessionStarted {
            timestamp: Utc::now(),
            restored_phase: restored,
        });
    }
    info!(phase = %restored, "session started");

    println!("{}", view::status_line(&controller.snapshot()));
    let watcher = spawn_phase_watcher(&controller);
    let mut session = Session::new(Arc::clone(&controller), config.flourish(args.reduced_motion));
    if let Some(intro) = session.intro() {
        println!("{intro}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut reason = "end of input";
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(SessionCommand::Quit) => {
                reason = "quit";
                break;
            }
            Ok(command) => {
                for out in session.handle(command) {
                    println!("{out}");
                }
            }
            Err(ParseError::Empty) => {}
            Err(e) => println!("{e}"),
        }
    }

    drop(session);
    controller.shutdown();
    watcher.abort();
    let emitted = events.as_ref().map_or(0, |events| {
        events.emit(Event::SessionStopped {
            timestamp: Utc::now(),
            reason: reason.to_owned(),
        });
        events.event_count()
    });
    info!(reason, events = emitted, "session stopped");
    Ok(())
}
