//! The context-reconstruction graph walker.
//!
//! Given a [`CanvasSnapshot`] and a start node, [`walk_context`]
//! assembles the ordered, role-tagged message list representing that
//! node's conversational context:
//!
//! 1. **Ancestry chain**: follow parent edges (`to_node == current`)
//!    upward from the start node, root ancestor first, start node
//!    last. A visited set guarantees termination on cyclic edge sets.
//! 2. **Horizontal context**: for each chain node, every edge pointing
//!    *into* it from a node that is not itself on the chain
//!    contributes that neighbor as auxiliary context. Edges pointing
//!    out of the chain toward children never qualify, so descendants
//!    of the start node are never included.
//! 3. **Resolution**: chain nodes then context neighbors are resolved
//!    sequentially through the injected [`ContentResolver`]. Missing
//!    nodes and empty content are skipped; a per-node resolver failure
//!    is logged and replaced by the node's fallback text. Horizontal
//!    content with the `user` role is wrapped in the
//!    additional-context delimiter so the model can tell injected peer
//!    material from primary turns.
//! 4. **Assembly**: system messages first (in discovery order), then
//!    everything else (in discovery order).
//!
//! The walker never mutates the snapshot, never fails, and holds no
//! state between invocations.
//!
//! A neighbor that is horizontal context for several chain nodes is
//! resolved and emitted once per anchoring chain node. That matches
//! the host application's observed behavior and is covered by a test;
//! de-duplicating here would silently change prompt contents.
//!
//! # Examples
//!
//! ```no_run
//! use canvasweave::canvas::{CanvasEdge, CanvasNode, CanvasSnapshot};
//! use canvasweave::resolver::{DirStore, StoreResolver};
//! use canvasweave::walker::walk_context;
//!
//! #[tokio::main]
//! async fn main() {
//!     let snapshot = CanvasSnapshot {
//!         nodes: vec![
//!             CanvasNode::text("prompt", "---\nrole: system\n---\nBe brief."),
//!             CanvasNode::text("question", "Why is the sky blue?"),
//!         ],
//!         edges: vec![CanvasEdge::connect("e1", "prompt", "question")],
//!     };
//!     let resolver = StoreResolver::new(DirStore::new("."));
//!     let messages = walk_context("question", &snapshot, &resolver).await;
//!     assert_eq!(messages.len(), 2);
//! }
//! ```

use rustc_hash::FxHashSet;

use crate::canvas::CanvasSnapshot;
use crate::message::{Message, Role};
use crate::resolver::{ContentResolver, ResolvedNode};

/// Opening delimiter wrapped around horizontal user-role content.
pub const CONTEXT_OPEN: &str = "--- begin additional context ---";
/// Closing delimiter wrapped around horizontal user-role content.
pub const CONTEXT_CLOSE: &str = "--- end additional context ---";

/// Wraps content in the additional-context delimiter.
#[must_use]
pub fn wrap_context(content: &str) -> String {
    format!("{CONTEXT_OPEN}\n{content}\n{CONTEXT_CLOSE}")
}

/// Resolves the ancestry chain for `start_id`, root ancestor first.
///
/// Follows the first edge (in snapshot order) whose `to_node` is the
/// current node; its `from_node` becomes the new current node. The
/// walk stops when no parent edge exists or when an id repeats, so a
/// cyclic edge set yields a finite chain.
///
/// The start id is always recorded, whether or not a node with that
/// id exists in the snapshot; unresolvable ids are skipped later,
/// when messages are assembled.
#[must_use]
pub fn parent_chain(start_id: &str, snapshot: &CanvasSnapshot) -> Vec<String> {
    let mut chain: Vec<String> = Vec::new();
    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut current = start_id.to_string();

    loop {
        if !visited.insert(current.clone()) {
            break;
        }
        chain.push(current.clone());
        match snapshot.edges.iter().find(|e| e.to_node == current) {
            Some(edge) => current = edge.from_node.clone(),
            None => break,
        }
    }

    // Ids were collected start-node-first; the prompt wants the root
    // ancestor first.
    chain.reverse();
    chain
}

/// Collects horizontal context neighbors for every chain node.
///
/// A neighbor qualifies when an edge points *into* a chain node from
/// a node that is not on the chain. Chain nodes are processed in
/// chain order and edges in snapshot order, which fixes the discovery
/// order of the result. A neighbor anchored to several chain nodes
/// appears once per anchor; see the module docs.
#[must_use]
pub fn context_neighbors(chain: &[String], snapshot: &CanvasSnapshot) -> Vec<String> {
    let on_chain: FxHashSet<&str> = chain.iter().map(String::as_str).collect();
    let mut neighbors = Vec::new();

    for id in chain {
        for edge in &snapshot.edges {
            if edge.to_node == *id && !on_chain.contains(edge.from_node.as_str()) {
                neighbors.push(edge.from_node.clone());
            }
        }
    }
    neighbors
}

/// Reconstructs the conversational context for `start_id`.
///
/// Returns all resolvable messages in the order described in the
/// module docs: system messages first, then user/assistant messages,
/// each group preserving discovery order. The result may be empty
/// (start node absent, or nothing resolved to content).
///
/// Nodes are resolved strictly one at a time; message ordering
/// depends on insertion order, and sequential awaits keep that
/// deterministic without a sort step.
pub async fn walk_context(
    start_id: &str,
    snapshot: &CanvasSnapshot,
    resolver: &dyn ContentResolver,
) -> Vec<Message> {
    let chain = parent_chain(start_id, snapshot);
    let neighbors = context_neighbors(&chain, snapshot);
    let on_chain: FxHashSet<&str> = chain.iter().map(String::as_str).collect();

    tracing::debug!(
        start = %start_id,
        chain_len = chain.len(),
        context_len = neighbors.len(),
        "reconstructing canvas context"
    );

    let mut system_buf: Vec<Message> = Vec::new();
    let mut other_buf: Vec<Message> = Vec::new();

    let ordered = chain
        .iter()
        .map(|id| (id, false))
        .chain(neighbors.iter().map(|id| (id, true)));

    for (id, from_context) in ordered {
        let Some(node) = snapshot.node(id) else {
            // Edges may reference nodes that no longer exist; nothing
            // to contribute.
            continue;
        };

        let resolved = match resolver.resolve(node).await {
            Ok(resolved) => resolved,
            Err(err) => {
                tracing::warn!(
                    node = %node.id,
                    error = %err,
                    "node resolution failed, substituting fallback content"
                );
                ResolvedNode {
                    role: None,
                    content: node.fallback_text(),
                }
            }
        };

        let Some(content) = resolved.content.filter(|c| !c.is_empty()) else {
            continue;
        };
        let role = Role::normalize(resolved.role.as_deref());

        // An id that is both ancestry and context always counts as
        // ancestry.
        let horizontal = from_context && !on_chain.contains(id.as_str());
        let content = if horizontal && role == Role::User {
            wrap_context(&content)
        } else {
            content
        };

        let message = Message::new(role, content);
        if role == Role::System {
            system_buf.push(message);
        } else {
            other_buf.push(message);
        }
    }

    system_buf.extend(other_buf);
    system_buf
}
