use canvasweave::canvas::{CanvasNode, CanvasSnapshot};
use canvasweave::resolver::{ContentResolver, DirStore, FileStore, StoreResolver};

#[tokio::test]
async fn dir_store_reads_relative_to_root() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sub = dir.path().join("notes");
    std::fs::create_dir(&sub).expect("mkdir");
    std::fs::write(sub.join("plan.md"), "---\nrole: assistant\n---\nStep one.")
        .expect("write fixture");

    let store = DirStore::new(dir.path());
    let raw = store.read_to_string("notes/plan.md").await.expect("read");
    assert!(raw.contains("Step one."));

    let resolver = StoreResolver::new(store);
    let resolved = resolver
        .resolve(&CanvasNode::file("n", "notes/plan.md"))
        .await
        .expect("resolve");
    assert_eq!(resolved.role.as_deref(), Some("assistant"));
    assert_eq!(resolved.content.as_deref(), Some("Step one."));
}

#[tokio::test]
async fn dir_store_missing_file_falls_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let resolver = StoreResolver::new(DirStore::new(dir.path()));

    let resolved = resolver
        .resolve(&CanvasNode::file("n", "notes/absent.md"))
        .await
        .expect("resolve never fails on not-found");
    assert_eq!(resolved.role, None);
    assert_eq!(
        resolved.content.as_deref(),
        Some("Could not read file: notes/absent.md")
    );
}

#[tokio::test]
async fn file_without_front_matter_keeps_full_text_and_no_role() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("raw.md"), "just prose\nsecond line").expect("write fixture");

    let resolver = StoreResolver::new(DirStore::new(dir.path()));
    let resolved = resolver
        .resolve(&CanvasNode::file("n", "raw.md"))
        .await
        .expect("resolve");
    assert_eq!(resolved.role, None);
    assert_eq!(resolved.content.as_deref(), Some("just prose\nsecond line"));
}

#[tokio::test]
async fn snapshot_loads_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("board.canvas");
    std::fs::write(
        &path,
        r#"{
            "nodes": [
                {"id": "n1", "type": "text", "text": "hello", "x": 0, "y": 0, "width": 100, "height": 50}
            ],
            "edges": []
        }"#,
    )
    .expect("write fixture");

    let snapshot = CanvasSnapshot::load(&path).await.expect("load");
    assert!(snapshot.contains("n1"));

    let err = CanvasSnapshot::load(dir.path().join("missing.canvas"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("missing.canvas"));
}
