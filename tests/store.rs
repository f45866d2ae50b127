//! Tests for the node store: CRUD, active-node tracking and persistence.
mod common;
use common::*;
use script_builder::prelude::*;

#[test]
fn test_save_new_id_appends() {
    let mut store = empty_store();
    let node = create_default(NodeKind::Greeting);

    let result = store.save(node.clone());
    assert!(result.success);
    assert_eq!(result.action, StoreAction::Created);
    assert_eq!(result.message, "New Greeting node created successfully");
    assert_eq!(store.len(), 1);
    assert_eq!(store.state_of(node.id()), NodeState::Saved);
    assert_eq!(persisted(&store), vec![node]);
}

#[test]
fn test_save_existing_id_replaces_in_place() {
    let nodes = mixed_nodes(3);
    let mut store = seeded_store(&nodes);

    let edited = nodes[1]
        .update_field(&DataPatch::question("Changed?"))
        .unwrap();
    let result = store.save(edited.clone());

    assert_eq!(result.message, "Question node updated successfully");
    assert_eq!(result.action, StoreAction::Updated);
    assert_eq!(store.len(), 3);
    assert_eq!(store.nodes()[1], edited);
    assert_eq!(store.nodes()[0], nodes[0]);
    assert_eq!(store.nodes()[2], nodes[2]);
}

#[test]
fn test_information_saved_twice_keeps_one_entry() {
    let mut store = empty_store();
    let node = create_default(NodeKind::Information);
    store.save(node.clone());

    let edited = node
        .update_field(&DataPatch::message("We now also support Swahili."))
        .unwrap();
    let result = store.save(edited);

    assert!(result.success);
    assert_eq!(store.len(), 1);
    assert_eq!(
        store.get_by_id(node.id()).unwrap().content(),
        &NodeContent::Information(MessageData {
            message: "We now also support Swahili.".to_string()
        })
    );
    assert_eq!(persisted(&store).len(), 1);
}

#[test]
fn test_delete_absent_id_fails_without_changes() {
    let nodes = mixed_nodes(2);
    let mut store = seeded_store(&nodes);

    let result = store.delete(&NodeId::from("node-missing"));
    assert!(!result.success);
    assert_eq!(result.message, "Node not found");
    assert_eq!(store.nodes(), nodes.as_slice());
}

#[test]
fn test_delete_active_promotes_first_remaining() {
    let nodes = mixed_nodes(3);
    let mut store = seeded_store(&nodes);

    // The most recent node is active after loading.
    assert_eq!(store.active(), Some(&nodes[2]));

    let result = store.delete(nodes[2].id());
    assert!(result.success);
    assert_eq!(result.message, "Information node deleted successfully");
    assert_eq!(store.active(), Some(&nodes[0]));
    assert_eq!(persisted(&store), nodes[..2].to_vec());
}

#[test]
fn test_delete_last_node_clears_active() {
    let nodes = mixed_nodes(1);
    let mut store = seeded_store(&nodes);

    store.delete(nodes[0].id());
    assert!(store.is_empty());
    assert_eq!(store.active(), None);
    // The emptied collection is persisted too.
    assert!(persisted(&store).is_empty());
}

#[test]
fn test_delete_inactive_keeps_active() {
    let nodes = mixed_nodes(3);
    let mut store = seeded_store(&nodes);
    store.delete(nodes[0].id());
    assert_eq!(store.active(), Some(&nodes[2]));
}

#[test]
fn test_deleted_id_is_recreated_on_save() {
    let nodes = mixed_nodes(2);
    let mut store = seeded_store(&nodes);

    store.delete(nodes[0].id());
    assert_eq!(store.state_of(nodes[0].id()), NodeState::Unsaved);

    let result = store.save(nodes[0].clone());
    assert_eq!(result.action, StoreAction::Created);
    assert_eq!(store.nodes().last(), Some(&nodes[0]));
}

#[test]
fn test_set_active_does_not_persist() {
    let mut store = empty_store();
    let draft = question_node("draft", "", &[]);
    store.set_active(draft.clone());

    assert_eq!(store.active(), Some(&draft));
    assert!(store.is_empty());
    assert!(store.blob().peek(TEST_KEY).is_none());
}

#[test]
fn test_save_active_is_gated_on_validity() {
    let mut store = empty_store();
    store.set_active(question_node("draft", "Pick one?", &["Only"]));

    match store.save_active() {
        Err(StoreError::ValidationFailed(errors)) => {
            assert_eq!(
                errors.for_field("options").next().unwrap().message,
                "At least 2 options required"
            );
        }
        other => panic!("expected a validation failure, got {:?}", other),
    }
    assert!(store.is_empty());

    store
        .edit_active(|node| node.add_option("Another"))
        .unwrap();
    let result = store.save_active().unwrap();
    assert_eq!(result.action, StoreAction::Created);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_round_trip_through_blob() {
    for count in [0, 1, 7, 50] {
        let nodes = mixed_nodes(count);
        let store = seeded_store(&nodes);
        assert_eq!(store.nodes(), nodes.as_slice());

        let reopened = NodeStore::open(store.into_blob(), TEST_KEY);
        assert_eq!(reopened.nodes(), nodes.as_slice());
    }
}

#[test]
fn test_round_trip_keeps_drafts_and_unicode() {
    // The store persists whatever it is handed; validity is checked before saving.
    let nodes = vec![
        question_node("q-draft", "", &["Only one"]),
        greeting_node("g-unicode", "Habari! Karibu sana \u{1F44B} \"quoted\"\n"),
        information_node("i-accents", "Réponse en français, 日本語も"),
    ];
    let store = seeded_store(&nodes);
    assert_eq!(store.nodes(), nodes.as_slice());

    let reopened = NodeStore::open(store.into_blob(), TEST_KEY);
    assert_eq!(reopened.nodes(), nodes.as_slice());
    assert!(!reopened.nodes()[0].is_valid());
}

#[test]
fn test_get_by_id_of_unknown_id_is_none() {
    let store = seeded_store(&mixed_nodes(3));
    assert!(store.get_by_id(&NodeId::from("node-999")).is_none());
    assert!(empty_store().get_by_id(&NodeId::from("")).is_none());
}

#[test]
fn test_store_over_boxed_backend() {
    let blob: Box<dyn BlobStore> = Box::new(MemoryBlobStore::new());
    let mut store: NodeStore<Box<dyn BlobStore>> = NodeStore::open(blob, TEST_KEY);

    let node = create_default(NodeKind::Information);
    assert!(store.save(node.clone()).success);

    let reopened = NodeStore::open(store.into_blob(), TEST_KEY);
    assert_eq!(reopened.nodes(), &[node]);
}

#[test]
fn test_corrupt_blob_resets_to_default_greeting() {
    for raw in ["not json", "{\"id\":1}", "[{\"id\":\"a\",\"type\":\"poem\",\"data\":{}}]"] {
        let store = NodeStore::open(MemoryBlobStore::with_blob(TEST_KEY, raw), TEST_KEY);
        assert!(store.is_empty(), "blob {:?} should be discarded", raw);
        let active = store.active().unwrap();
        assert_eq!(active.kind(), NodeKind::Greeting);
        assert!(active.is_valid());
    }
}

#[test]
fn test_strict_load_reports_corruption() {
    let blob = MemoryBlobStore::with_blob(TEST_KEY, "[1, 2, 3]");
    let err = NodeStore::load(&blob, TEST_KEY).unwrap_err();
    assert!(matches!(err, StoreError::StorageCorrupt { .. }));
    assert!(err.to_string().contains(TEST_KEY));
}

#[test]
fn test_file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let node = create_default(NodeKind::Question);

    {
        let blob = FileBlobStore::open(dir.path()).unwrap();
        let mut store = NodeStore::with_default_key(blob);
        store.save(node.clone());
    }

    let blob = FileBlobStore::open(dir.path()).unwrap();
    let store = NodeStore::with_default_key(blob);
    assert_eq!(store.nodes(), &[node.clone()]);
    assert_eq!(store.active(), Some(&node));
}
