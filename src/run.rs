//! A single documentation run against a host
//!
//! ```text
//! Idle -> ValidatingSelection -> LoadingFonts -> BuildingTree -> Positioning -> Done
//!   any step ---------------------------------------------------------------> Aborted
//! ```
//!
//! The document is built detached and only handed to the host once it is
//! complete and positioned, so an aborted run leaves the canvas untouched.
//! The host session is closed at the end of every run.

use tracing::{debug, info};

use crate::document::{load_font_set, DocBuilder};
use crate::error::DocError;
use crate::layout::{self, BoundingBox};
use crate::scene::{Host, NodeId, Notice, SceneNode};
use crate::DocConfig;

/// Steps of a documentation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    ValidatingSelection,
    LoadingFonts,
    BuildingTree,
    Positioning,
    Done,
    Aborted,
}

/// The document a successful run attached to the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Documented {
    pub id: NodeId,
    pub component: String,
    /// Position and size of the document on the canvas
    pub bounds: BoundingBox,
}

/// A finished run: the states it went through and its outcome
#[derive(Debug)]
pub struct Run {
    trace: Vec<RunState>,
    outcome: Result<Documented, DocError>,
}

impl Run {
    /// Final state, `Done` or `Aborted`
    pub fn state(&self) -> RunState {
        self.trace.last().copied().unwrap_or(RunState::Idle)
    }

    /// Every state visited, in order
    pub fn trace(&self) -> &[RunState] {
        &self.trace
    }

    pub fn outcome(&self) -> Result<&Documented, &DocError> {
        self.outcome.as_ref()
    }

    pub fn into_outcome(self) -> Result<Documented, DocError> {
        self.outcome
    }
}

struct Tracker {
    trace: Vec<RunState>,
}

impl Tracker {
    fn advance(&mut self, state: RunState) {
        debug!(from = ?self.trace.last(), to = ?state, "run state");
        self.trace.push(state);
    }
}

/// Document the selected component on `host`
pub async fn run<H: Host>(host: &mut H, config: &DocConfig) -> Run {
    let mut tracker = Tracker {
        trace: vec![RunState::Idle],
    };

    let outcome = execute(host, config, &mut tracker).await;
    match &outcome {
        Ok(documented) => {
            tracker.advance(RunState::Done);
            info!(component = documented.component.as_str(), id = %documented.id, "documentation created");
            host.notify(Notice::info(format!(
                "Documentation created for \"{}\"",
                documented.component
            )));
        }
        Err(e) => {
            tracker.advance(RunState::Aborted);
            host.notify(Notice::error(e.notice_message()));
        }
    }
    host.close();

    Run {
        trace: tracker.trace,
        outcome,
    }
}

async fn execute<H: Host>(
    host: &mut H,
    config: &DocConfig,
    tracker: &mut Tracker,
) -> Result<Documented, DocError> {
    tracker.advance(RunState::ValidatingSelection);
    let component = validate_selection(&*host)?;

    tracker.advance(RunState::LoadingFonts);
    let fonts = load_font_set(&*host, &config.stylesheet.fonts).await?;

    tracker.advance(RunState::BuildingTree);
    let mut doc = DocBuilder::new(&*host, &fonts, config).documentation(&component)?;

    tracker.advance(RunState::Positioning);
    let anchor = component
        .absolute_bounding_box
        .unwrap_or_else(|| component.relative_bounds());
    doc.set_position(anchor.right() + config.layout.placement_gap, anchor.y);
    layout::compute(&mut doc, &config.layout);
    let bounds = doc.bounds;

    let id = host.append_to_canvas(doc);
    host.set_selection(vec![id.clone()]);
    host.scroll_and_zoom_into_view(&[id.clone()]);

    Ok(Documented {
        id,
        component: component.name,
        bounds,
    })
}

/// The single selected component or component set
fn validate_selection<H: Host>(host: &H) -> Result<SceneNode, DocError> {
    let selection = host.selection();
    let selected = match selection.as_slice() {
        [] => return Err(DocError::EmptySelection),
        [one] => *one,
        _ => return Err(DocError::MultipleSelection),
    };
    if !selected.node_type.is_component_like() {
        return Err(DocError::NotAComponent(selected.node_type.host_name()));
    }
    Ok(selected.clone())
}
