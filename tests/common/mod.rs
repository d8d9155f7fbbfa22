//! Shared fixtures for integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use canvasweave::canvas::{CanvasEdge, CanvasNode, CanvasSnapshot};
use canvasweave::resolver::FileStore;
use rustc_hash::FxHashMap;

/// In-memory [`FileStore`] keyed by store-relative path.
#[derive(Clone, Debug, Default)]
pub struct MemStore {
    files: FxHashMap<String, String>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }
}

#[async_trait]
impl FileStore for MemStore {
    async fn read_to_string(&self, path: &str) -> std::io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, format!("no such file: {path}"))
        })
    }
}

/// Text node declaring a role via front matter.
pub fn role_text(id: &str, role: &str, body: &str) -> CanvasNode {
    CanvasNode::text(id, format!("---\nrole: {role}\n---\n{body}"))
}

/// Snapshot whose nodes are connected in a single parent-to-child
/// chain, in slice order.
pub fn linear_chain(nodes: Vec<CanvasNode>) -> CanvasSnapshot {
    let edges = nodes
        .windows(2)
        .enumerate()
        .map(|(i, pair)| CanvasEdge::connect(format!("e{i}"), pair[0].id.clone(), pair[1].id.clone()))
        .collect();
    CanvasSnapshot { nodes, edges }
}
