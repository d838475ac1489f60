//! Line commands for the interactive picker session

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::config::Config;
use crate::error::{PickerError, Result};
use crate::host::PickerHost;
use crate::remote::{CenterDispatcher, DispatchingHost, HttpBackend};
use crate::session::Session;
use crate::state::PersistedCenterState;
use crate::types::{FilterSpec, GraphMode};

pub const HELP: &str = "\
commands:
  count N              set the number of centers to request
  add                  append an empty filter row
  remove I             delete filter row I
  set I ATTR SPEC      edit filter row I
  custom on|off        switch custom filters
  copy                 copy the view restrictions into the filter rows
  restrict ATTR SPEC   add a view restriction
  unrestrict           drop all view restrictions
  pick | next          request centers
  mode sampled|bucketed|none
  centers [ID...]      override the centers (none clears them)
  load PATH            load a saved state file
  show                 print picker fields and state
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Count(String),
    Add,
    Remove(usize),
    Set { index: usize, filter: FilterSpec },
    Custom(bool),
    Copy,
    Restrict(FilterSpec),
    Unrestrict,
    Pick,
    Mode(Option<GraphMode>),
    Centers(Option<Vec<String>>),
    Load(PathBuf),
    Show,
    Help,
    Quit,
}

fn parse_index(raw: Option<&str>, line: &str) -> Result<usize> {
    raw.and_then(|s| s.parse().ok())
        .ok_or_else(|| PickerError::UnknownCommand(line.to_string()))
}

impl FromStr for Command {
    type Err = PickerError;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(PickerError::UnknownCommand(String::new()));
        };
        let rest: Vec<&str> = words.collect();
        let unknown = || PickerError::UnknownCommand(line.trim().to_string());

        let command = match (head, rest.as_slice()) {
            ("count", [n]) => Command::Count(n.to_string()),
            ("add", []) => Command::Add,
            ("remove", [i]) => Command::Remove(parse_index(Some(*i), line)?),
            ("set", [i, attr, spec @ ..]) => Command::Set {
                index: parse_index(Some(*i), line)?,
                filter: FilterSpec::new(*attr, spec.join(" ")),
            },
            ("custom", ["on"]) => Command::Custom(true),
            ("custom", ["off"]) => Command::Custom(false),
            ("copy", []) => Command::Copy,
            ("restrict", [attr, spec @ ..]) if !spec.is_empty() => {
                Command::Restrict(FilterSpec::new(*attr, spec.join(" ")))
            }
            ("unrestrict", []) => Command::Unrestrict,
            ("pick" | "next", []) => Command::Pick,
            ("mode", ["none"]) => Command::Mode(None),
            ("mode", [mode]) => Command::Mode(Some(mode.parse()?)),
            ("centers", []) => Command::Centers(None),
            ("centers", ids) => Command::Centers(Some(ids.iter().map(|s| s.to_string()).collect())),
            ("load", [path]) => Command::Load(PathBuf::from(*path)),
            ("show", []) => Command::Show,
            ("help" | "?", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            _ => return Err(unknown()),
        };
        Ok(command)
    }
}

/// Whether the session loop should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn execute(session: &mut Session<DispatchingHost>, command: Command) -> Result<Flow> {
    match command {
        Command::Count(n) => session.set_count(n),
        Command::Add => session.add_filter(),
        Command::Remove(index) => {
            let rows = session.reactor().fields().filters.len();
            if index >= rows {
                return Err(PickerError::Other(format!(
                    "no filter row {index} ({rows} rows)"
                )));
            }
            session.remove_filter(index);
        }
        Command::Set { index, filter } => {
            if !session.set_filter(index, filter) {
                return Err(PickerError::Other(format!("no filter row {index}")));
            }
        }
        Command::Custom(custom) => {
            session.set_custom_filters(custom)?;
        }
        Command::Copy => session.copy_restrictions_from_filters(),
        Command::Restrict(filter) => session.host_mut().restrictions.push(filter),
        Command::Unrestrict => session.host_mut().restrictions.clear(),
        Command::Pick => {
            let decision = session.request_new_centers()?;
            println!("{decision:?}");
        }
        Command::Mode(mode) => {
            if let Some(decision) = session.set_graph_mode(mode)? {
                println!("auto {decision:?}");
            }
        }
        Command::Centers(centers) => {
            session.set_centers(centers)?;
        }
        Command::Load(path) => {
            let state = PersistedCenterState::load_from(&path)?;
            if let Some(decision) = session.load(state)? {
                println!("auto {decision:?}");
            }
        }
        Command::Show => println!("{}", render(session)?),
        Command::Help => println!("{HELP}"),
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Picker fields, paging offset and persisted state
pub fn render<H: PickerHost>(session: &Session<H>) -> Result<String> {
    let fields = serde_json::to_string(session.reactor().fields())?;
    let state = serde_json::to_string_pretty(session.state())?;
    Ok(format!(
        "fields: {fields}\noffset: {}\nstate: {state}",
        session.reactor().pick_options().offset
    ))
}

/// Run an interactive picker over the state file at `state_path`.
///
/// Commands are read from stdin while backend responses are applied as they
/// arrive. The state is written back when the session ends.
pub async fn cmd_session(config: &Config, state_path: &Path) -> Result<()> {
    let state = PersistedCenterState::load_from(state_path)?;
    let backend = HttpBackend::from_config(&config.backend)?;
    info!(endpoint = %backend.endpoint(), "starting picker session");

    let (dispatcher, mut outcomes) = CenterDispatcher::new(Arc::new(backend));
    let mut session = Session::open(state, DispatchingHost::new(dispatcher))?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>().and_then(|c| execute(&mut session, c)) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => break,
                    Err(e) => eprintln!("{e}"),
                }
            }
            Some(outcome) = outcomes.recv() => {
                match session.complete(outcome.request, outcome.result) {
                    Ok(_) => println!(
                        "centers: {}",
                        session.state().centers.as_deref().unwrap_or_default().join(", ")
                    ),
                    Err(e) => eprintln!("center request failed: {e}"),
                }
            }
        }
    }

    session.into_state().save_to(state_path)
}

/// Print the persisted state at `state_path`
pub fn cmd_show_state(state_path: &Path) -> Result<()> {
    let state = PersistedCenterState::load_from(state_path)?;
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
