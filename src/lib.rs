//! # Canvasweave: conversational context from canvas graphs
//!
//! Canvasweave reconstructs the conversational context of a node in a
//! canvas document (a node-and-edge graph of text, file, link and
//! group nodes) and renders it as an ordered list of role-tagged
//! messages ready to submit to a language model.
//!
//! ## Core Concepts
//!
//! - **Snapshot**: an immutable view of one canvas document's nodes
//!   and edges, read fresh per walk
//! - **Walker**: a pure traversal that resolves the ancestry chain of
//!   a start node plus its horizontal peer context
//! - **Resolver**: an injected capability turning a node into declared
//!   role and content, possibly via file I/O
//! - **Messages**: `system`/`user`/`assistant` units, system messages
//!   always first
//!
//! ## Quick Start
//!
//! ```no_run
//! use canvasweave::canvas::CanvasSnapshot;
//! use canvasweave::resolver::{DirStore, StoreResolver};
//! use canvasweave::walker::walk_context;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), canvasweave::canvas::CanvasError> {
//!     canvasweave::telemetry::init();
//!
//!     let snapshot = CanvasSnapshot::load("ideas.canvas").await?;
//!     let resolver = StoreResolver::new(DirStore::new("."));
//!
//!     let messages = walk_context("node-id", &snapshot, &resolver).await;
//!     for msg in &messages {
//!         println!("[{}] {}", msg.role, msg.content);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Guarantees
//!
//! The walker never mutates the snapshot, never panics on any data
//! condition (cycles, dangling edges, missing start node, unreadable
//! files), resolves nodes strictly sequentially, and keeps all
//! `system` messages ahead of the rest of the output.
//!
//! ## Module Guide
//!
//! - [`canvas`] - Snapshot data model and canvas JSON (de)serialization
//! - [`walker`] - Ancestry/horizontal traversal and message assembly
//! - [`resolver`] - Content resolution capability and the file-store
//!   backed implementation
//! - [`frontmatter`] - Role/body extraction from delimited metadata
//!   blocks
//! - [`message`] - Role-tagged message types
//! - [`telemetry`] - Tracing subscriber installation

pub mod canvas;
pub mod frontmatter;
pub mod message;
pub mod resolver;
pub mod telemetry;
pub mod walker;
