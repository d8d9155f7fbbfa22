//! Content and role resolution for canvas nodes.
//!
//! The walker does not know how to turn a node into text: that is the
//! job of a [`ContentResolver`], an injected capability that may
//! perform I/O (reading referenced files out of the host document
//! store). The crate ships [`StoreResolver`], which implements the
//! per-kind resolution contract over any [`FileStore`]:
//!
//! - `text` nodes: inline front matter may declare a role (default
//!   `user`); the trimmed body is the content, empty body meaning no
//!   content at all.
//! - `file` nodes: role comes from the file's front matter (no
//!   default), content is the file text with front matter stripped.
//!   A failed read degrades to a fallback string naming the path; it
//!   is logged, never surfaced as an error.
//! - `link` nodes: no role; the URL itself is the content.
//! - `group` nodes: nothing to contribute.
//!
//! Resolver implementations must not fail for ordinary not-found
//! conditions; [`ResolveError`] exists for genuinely broken stores,
//! and even then the walker recovers per node.

use async_trait::async_trait;
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::canvas::{CanvasNode, NodeContent};
use crate::frontmatter;

/// Resolution result for a single node.
///
/// `role` is the *declared* role, still free-form; the walker
/// normalizes it. `content: None` means the node contributes no
/// message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedNode {
    pub role: Option<String>,
    pub content: Option<String>,
}

impl ResolvedNode {
    /// A resolution that contributes nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Errors a resolver implementation may raise.
///
/// These represent broken capabilities, not missing content; the
/// walker catches them per node and substitutes the node's fallback
/// text.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    /// The backing store failed in a way that is not a plain
    /// not-found condition.
    #[error("document store error for {path}: {source}")]
    #[diagnostic(code(canvasweave::resolver::store))]
    Store {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Capability that turns a canvas node into resolved role/content.
///
/// Implementations may suspend on I/O. They are invoked strictly
/// sequentially by the walker, one node at a time.
#[async_trait]
pub trait ContentResolver: Send + Sync {
    async fn resolve(&self, node: &CanvasNode) -> Result<ResolvedNode, ResolveError>;
}

/// Capability abstracting the host document store for `file` nodes.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Reads the full text of the file at `path` (store-relative).
    async fn read_to_string(&self, path: &str) -> std::io::Result<String>;
}

/// [`FileStore`] over a directory on the local filesystem.
///
/// Paths in `file` nodes are resolved relative to the root directory,
/// mirroring how a canvas document references files inside its vault.
#[derive(Clone, Debug)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The root directory paths are resolved against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl FileStore for DirStore {
    async fn read_to_string(&self, path: &str) -> std::io::Result<String> {
        tokio::fs::read_to_string(self.root.join(path)).await
    }
}

/// The standard [`ContentResolver`]: per-kind dispatch over a
/// [`FileStore`].
#[derive(Clone, Debug)]
pub struct StoreResolver<S> {
    store: S,
}

impl<S> StoreResolver<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: FileStore> ContentResolver for StoreResolver<S> {
    async fn resolve(&self, node: &CanvasNode) -> Result<ResolvedNode, ResolveError> {
        match &node.content {
            NodeContent::Text { text } => {
                let doc = frontmatter::parse(text);
                Ok(ResolvedNode {
                    // Inline text defaults to the user role when none
                    // is declared.
                    role: doc.role.or_else(|| Some("user".to_string())),
                    content: if doc.body.is_empty() {
                        None
                    } else {
                        Some(doc.body)
                    },
                })
            }
            NodeContent::File { file, .. } => match self.store.read_to_string(file).await {
                Ok(raw) => {
                    let doc = frontmatter::parse(&raw);
                    Ok(ResolvedNode {
                        role: doc.role,
                        content: if doc.body.is_empty() {
                            None
                        } else {
                            Some(doc.body)
                        },
                    })
                }
                Err(err) => {
                    tracing::warn!(
                        node = %node.id,
                        path = %file,
                        error = %err,
                        "file node unreadable, substituting fallback content"
                    );
                    Ok(ResolvedNode {
                        role: None,
                        content: node.fallback_text(),
                    })
                }
            },
            NodeContent::Link { url } => Ok(ResolvedNode {
                role: None,
                content: Some(url.clone()),
            }),
            NodeContent::Group { .. } => Ok(ResolvedNode::empty()),
        }
    }
}
