//! In-memory host backed by a JSON scene snapshot

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::layout::DocumentNode;

use super::host::{Host, HostError, Notice, SceneLookup};
use super::instance::Instance;
use super::types::{
    FontName, NodeId, NodeType, PropertyDefinitions, SceneNode, Variable, VariableId,
};

/// Errors that can occur when loading a scene snapshot
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse scene JSON: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("duplicate node id '{0}' in scene")]
    DuplicateId(NodeId),
}

/// Serialized state of a host page
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Top-level nodes of the current page
    pub nodes: Vec<SceneNode>,
    #[serde(default)]
    pub variables: Vec<Variable>,
    /// Installed fonts; `None` means every font loads
    #[serde(default)]
    pub fonts: Option<Vec<FontName>>,
    #[serde(default)]
    pub selection: Vec<NodeId>,
}

/// A host that keeps the scene, canvas and UI side effects in memory
#[derive(Debug)]
pub struct MemoryHost {
    nodes: Vec<SceneNode>,
    paths: HashMap<NodeId, Vec<usize>>,
    parents: HashMap<NodeId, NodeId>,
    variables: HashMap<VariableId, String>,
    fonts: Option<HashSet<FontName>>,
    selection: Vec<NodeId>,
    instance_seq: Cell<u32>,
    font_requests: RefCell<Vec<FontName>>,
    notices: Vec<Notice>,
    canvas: Vec<(NodeId, DocumentNode)>,
    focused: Vec<NodeId>,
    closed: bool,
}

impl MemoryHost {
    /// Load a snapshot from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a snapshot from a JSON string
    pub fn from_json(content: &str) -> Result<Self, SceneError> {
        let snapshot: Snapshot = serde_json::from_str(content)?;
        Self::from_snapshot(snapshot)
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, SceneError> {
        let mut paths = HashMap::new();
        let mut parents = HashMap::new();
        for (i, node) in snapshot.nodes.iter().enumerate() {
            index_node(node, vec![i], None, &mut paths, &mut parents)?;
        }

        Ok(Self {
            nodes: snapshot.nodes,
            paths,
            parents,
            variables: snapshot
                .variables
                .into_iter()
                .map(|v| (v.id, v.name))
                .collect(),
            fonts: snapshot.fonts.map(|f| f.into_iter().collect()),
            selection: snapshot.selection,
            instance_seq: Cell::new(0),
            font_requests: RefCell::new(vec![]),
            notices: vec![],
            canvas: vec![],
            focused: vec![],
            closed: false,
        })
    }

    /// Replace the current selection
    pub fn select(&mut self, ids: Vec<NodeId>) {
        self.selection = ids;
    }

    pub fn selection_ids(&self) -> &[NodeId] {
        &self.selection
    }

    /// Documents attached to the canvas, in attach order
    pub fn canvas(&self) -> &[(NodeId, DocumentNode)] {
        &self.canvas
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Nodes the viewport was last framed on
    pub fn focused(&self) -> &[NodeId] {
        &self.focused
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Every font load attempted so far, in request order
    pub fn font_requests(&self) -> Vec<FontName> {
        self.font_requests.borrow().clone()
    }

    fn parent(&self, id: &NodeId) -> Option<&SceneNode> {
        self.parents.get(id).and_then(|p| self.node(p))
    }
}

fn index_node(
    node: &SceneNode,
    path: Vec<usize>,
    parent: Option<&NodeId>,
    paths: &mut HashMap<NodeId, Vec<usize>>,
    parents: &mut HashMap<NodeId, NodeId>,
) -> Result<(), SceneError> {
    if paths.contains_key(&node.id) {
        return Err(SceneError::DuplicateId(node.id.clone()));
    }
    if let Some(parent) = parent {
        parents.insert(node.id.clone(), parent.clone());
    }
    paths.insert(node.id.clone(), path.clone());
    for (i, child) in node.children.iter().enumerate() {
        let mut child_path = path.clone();
        child_path.push(i);
        index_node(child, child_path, Some(&node.id), paths, parents)?;
    }
    Ok(())
}

impl SceneLookup for MemoryHost {
    fn node(&self, id: &NodeId) -> Option<&SceneNode> {
        let path = self.paths.get(id)?;
        let (first, rest) = path.split_first()?;
        let mut node = self.nodes.get(*first)?;
        for i in rest {
            node = node.children.get(*i)?;
        }
        Some(node)
    }

    fn variable_name(&self, id: &VariableId) -> Option<&str> {
        self.variables.get(id).map(|s| s.as_str())
    }
}

#[async_trait(?Send)]
impl Host for MemoryHost {
    fn selection(&self) -> Vec<&SceneNode> {
        self.selection.iter().filter_map(|id| self.node(id)).collect()
    }

    fn property_definitions(&self, component: &SceneNode) -> PropertyDefinitions {
        if !component.component_property_definitions.is_empty() {
            return component.component_property_definitions.clone();
        }
        match self.parent(&component.id) {
            Some(parent) if parent.node_type == NodeType::ComponentSet => {
                parent.component_property_definitions.clone()
            }
            _ => PropertyDefinitions::new(),
        }
    }

    fn create_instance(&self, component: &SceneNode) -> Result<Instance, HostError> {
        if component.node_type != NodeType::Component {
            return Err(HostError::NotInstantiable {
                name: component.name.clone(),
                kind: component.node_type.host_name(),
            });
        }
        let seq = self.instance_seq.get() + 1;
        self.instance_seq.set(seq);
        Ok(Instance::from_component(
            component,
            self.property_definitions(component),
            seq,
        ))
    }

    async fn load_font(&self, font: &FontName) -> Result<(), HostError> {
        self.font_requests.borrow_mut().push(font.clone());
        match &self.fonts {
            Some(installed) if !installed.contains(font) => {
                Err(HostError::FontUnavailable(font.clone()))
            }
            _ => Ok(()),
        }
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn append_to_canvas(&mut self, mut root: DocumentNode) -> NodeId {
        root.mark_attached();
        let id = NodeId::new(format!("doc:{}", self.canvas.len() + 1));
        self.canvas.push((id.clone(), root));
        id
    }

    fn set_selection(&mut self, ids: Vec<NodeId>) {
        self.selection = ids;
    }

    fn scroll_and_zoom_into_view(&mut self, ids: &[NodeId]) {
        self.focused = ids.to_vec();
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
