//! Read-only snapshot of a canvas document's node-and-edge graph.
//!
//! A canvas document is a flat JSON file holding content nodes (text,
//! file references, links, groups) and directed edges between them.
//! [`CanvasSnapshot`] is the walker's view of one such document: it is
//! deserialized fresh per invocation and never mutated.
//!
//! Edge direction is semantically "from is upstream/parent of to" for
//! the vertical ancestry walk in [`crate::walker`]. Geometry (`x`,
//! `y`, `width`, `height`) and edge anchor sides are carried for
//! round-trip fidelity with the on-disk format, but the walker never
//! reads them.
//!
//! # Examples
//!
//! ```
//! use canvasweave::canvas::{CanvasEdge, CanvasNode, CanvasSnapshot};
//!
//! let snapshot = CanvasSnapshot {
//!     nodes: vec![
//!         CanvasNode::text("a", "---\nrole: system\n---\nBe concise."),
//!         CanvasNode::text("b", "Summarize the attached notes."),
//!     ],
//!     edges: vec![CanvasEdge::connect("e1", "a", "b")],
//! };
//!
//! assert!(snapshot.contains("a"));
//! assert!(snapshot.node("missing").is_none());
//! ```

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or parsing a canvas document.
///
/// Only snapshot *acquisition* can fail; once a [`CanvasSnapshot`]
/// exists, walking it is infallible.
#[derive(Debug, Error, Diagnostic)]
pub enum CanvasError {
    /// The document is not valid canvas JSON.
    #[error("failed to parse canvas document: {source}")]
    #[diagnostic(
        code(canvasweave::canvas::parse),
        help("Check that the file is a JSON canvas with top-level `nodes` and `edges` arrays.")
    )]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// The document could not be read from disk.
    #[error("failed to read canvas file {}", path.display())]
    #[diagnostic(code(canvasweave::canvas::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Kind-specific payload of a canvas node.
///
/// The serde `type` tag matches the on-disk canvas format: `text`,
/// `file`, `link` and `group`. Each variant carries exactly what its
/// content resolution needs; `Group` nodes carry no resolvable
/// content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeContent {
    /// Inline text, optionally prefixed with a front matter block.
    Text { text: String },
    /// Reference to a file in the host document store.
    File {
        file: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subpath: Option<String>,
    },
    /// An external URL.
    Link { url: String },
    /// A visual grouping container; contributes nothing to context.
    Group {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

/// A vertex in the canvas graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasNode {
    /// Unique identifier within the snapshot.
    pub id: String,
    /// Kind-discriminated payload.
    #[serde(flatten)]
    pub content: NodeContent,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl CanvasNode {
    /// Creates a text node with zeroed geometry.
    #[must_use]
    pub fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_content(id, NodeContent::Text { text: text.into() })
    }

    /// Creates a file-reference node with zeroed geometry.
    #[must_use]
    pub fn file(id: impl Into<String>, file: impl Into<String>) -> Self {
        Self::with_content(
            id,
            NodeContent::File {
                file: file.into(),
                subpath: None,
            },
        )
    }

    /// Creates a link node with zeroed geometry.
    #[must_use]
    pub fn link(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_content(id, NodeContent::Link { url: url.into() })
    }

    /// Creates a group node with zeroed geometry.
    #[must_use]
    pub fn group(id: impl Into<String>, label: Option<String>) -> Self {
        Self::with_content(id, NodeContent::Group { label })
    }

    fn with_content(id: impl Into<String>, content: NodeContent) -> Self {
        Self {
            id: id.into(),
            content,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Content to substitute when resolution of this node fails.
    ///
    /// File nodes degrade to a string naming the unreadable path so
    /// the model (and the user reading a transcript) can see what was
    /// skipped. Other kinds have nothing meaningful to substitute and
    /// simply contribute no message.
    #[must_use]
    pub fn fallback_text(&self) -> Option<String> {
        match &self.content {
            NodeContent::File { file, .. } => Some(format!("Could not read file: {file}")),
            _ => None,
        }
    }
}

/// A directed connection between two node identifiers.
///
/// `from_node` is the upstream/parent end. Edges may reference node
/// ids that do not exist in the snapshot; consumers tolerate this.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasEdge {
    /// Unique identifier within the snapshot.
    pub id: String,
    /// Upstream node id.
    pub from_node: String,
    /// Downstream node id.
    pub to_node: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_side: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_side: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl CanvasEdge {
    /// Creates a bare directed edge with no anchor sides or label.
    #[must_use]
    pub fn connect(
        id: impl Into<String>,
        from_node: impl Into<String>,
        to_node: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            from_node: from_node.into(),
            to_node: to_node.into(),
            from_side: None,
            to_side: None,
            label: None,
        }
    }
}

/// Immutable view of one canvas document, read fresh per walk.
///
/// Edge order is discovery order from the document; it carries no
/// semantics beyond being the tie-breaker when the ancestry walk finds
/// several parent edges.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasSnapshot {
    #[serde(default)]
    pub nodes: Vec<CanvasNode>,
    #[serde(default)]
    pub edges: Vec<CanvasEdge>,
}

impl CanvasSnapshot {
    /// Parses a snapshot from canvas JSON text.
    pub fn from_json(raw: &str) -> Result<Self, CanvasError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads and parses a canvas file from disk.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CanvasError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CanvasError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(&raw)
    }

    /// Serializes the snapshot back to canvas JSON.
    pub fn to_json(&self) -> Result<String, CanvasError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Looks up a node by id.
    ///
    /// Canvas documents are small (tens of nodes), so a linear scan
    /// is fine here.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&CanvasNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Returns true if a node with the given id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canvas_json() {
        let raw = r#"{
            "nodes": [
                {"id": "n1", "type": "text", "text": "hello", "x": 10, "y": -20, "width": 250, "height": 60},
                {"id": "n2", "type": "file", "file": "notes/plan.md", "x": 0, "y": 100, "width": 400, "height": 400},
                {"id": "n3", "type": "link", "url": "https://example.com", "x": 0, "y": 0, "width": 0, "height": 0},
                {"id": "n4", "type": "group", "label": "research", "x": 0, "y": 0, "width": 800, "height": 600}
            ],
            "edges": [
                {"id": "e1", "fromNode": "n1", "fromSide": "bottom", "toNode": "n2", "toSide": "top"}
            ]
        }"#;

        let snapshot = CanvasSnapshot::from_json(raw).expect("valid canvas");
        assert_eq!(snapshot.nodes.len(), 4);
        assert_eq!(snapshot.edges.len(), 1);

        assert_eq!(
            snapshot.node("n1").unwrap().content,
            NodeContent::Text {
                text: "hello".into()
            }
        );
        assert_eq!(
            snapshot.node("n2").unwrap().content,
            NodeContent::File {
                file: "notes/plan.md".into(),
                subpath: None,
            }
        );
        assert_eq!(snapshot.node("n1").unwrap().x, 10.0);

        let edge = &snapshot.edges[0];
        assert_eq!(edge.from_node, "n1");
        assert_eq!(edge.to_node, "n2");
        assert_eq!(edge.from_side.as_deref(), Some("bottom"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = CanvasSnapshot::from_json("{nodes: oops").unwrap_err();
        assert!(matches!(err, CanvasError::Parse { .. }));
    }

    #[test]
    fn missing_top_level_arrays_default_to_empty() {
        let snapshot = CanvasSnapshot::from_json("{}").expect("empty canvas");
        assert!(snapshot.nodes.is_empty());
        assert!(snapshot.edges.is_empty());
    }

    #[test]
    fn edge_camel_case_round_trip() {
        let snapshot = CanvasSnapshot {
            nodes: vec![CanvasNode::text("a", "x")],
            edges: vec![CanvasEdge::connect("e", "a", "b")],
        };
        let json = snapshot.to_json().expect("serialize");
        assert!(json.contains("\"fromNode\""));
        assert!(json.contains("\"toNode\""));
        let back = CanvasSnapshot::from_json(&json).expect("parse");
        assert_eq!(back, snapshot);
    }

    #[test]
    fn fallback_text_names_file_path() {
        let node = CanvasNode::file("f", "vault/missing.md");
        assert_eq!(
            node.fallback_text().as_deref(),
            Some("Could not read file: vault/missing.md")
        );
        assert!(CanvasNode::text("t", "x").fallback_text().is_none());
        assert!(CanvasNode::group("g", None).fallback_text().is_none());
    }
}
