//! The design host as seen by the documentation pipeline

use async_trait::async_trait;
use thiserror::Error;

use crate::layout::DocumentNode;

use super::instance::Instance;
use super::types::{FontName, NodeId, PropertyDefinitions, SceneNode, VariableId};

/// Errors reported by the host collaborator
#[derive(Debug, Error)]
pub enum HostError {
    #[error("font '{0}' is not available")]
    FontUnavailable(FontName),

    #[error("node '{0}' not found")]
    NodeNotFound(NodeId),

    #[error("cannot instantiate '{name}': node is a {kind}, not a component")]
    NotInstantiable { name: String, kind: &'static str },
}

/// Severity of a user notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message shown to the user by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Read-only lookups into the host scene
pub trait SceneLookup {
    /// Find any node by id
    fn node(&self, id: &NodeId) -> Option<&SceneNode>;

    /// Name of a design token, if the token still exists
    fn variable_name(&self, id: &VariableId) -> Option<&str>;
}

/// Operations the pipeline needs from the design host
#[async_trait(?Send)]
pub trait Host: SceneLookup {
    /// Currently selected nodes, in selection order
    fn selection(&self) -> Vec<&SceneNode>;

    /// Property schema governing a component.
    ///
    /// Variants inherit the schema of their component set.
    fn property_definitions(&self, component: &SceneNode) -> PropertyDefinitions;

    /// Create a new instance of a component
    fn create_instance(&self, component: &SceneNode) -> Result<Instance, HostError>;

    /// Make a font available for text nodes
    async fn load_font(&self, font: &FontName) -> Result<(), HostError>;

    fn notify(&mut self, notice: Notice);

    /// Attach a finished document to the canvas, returning its new id
    fn append_to_canvas(&mut self, root: DocumentNode) -> NodeId;

    fn set_selection(&mut self, ids: Vec<NodeId>);

    fn scroll_and_zoom_into_view(&mut self, ids: &[NodeId]);

    /// End the plugin session
    fn close(&mut self);
}
