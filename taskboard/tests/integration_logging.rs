//! Integration tests for activity logging

use taskboard::{
    list::AddList,
    task::{AddTask, GetTask, MoveTask, UpdateTask},
    BoardConfig, BoardOperationProcessor, BoardStore,
};

fn empty_store() -> BoardStore {
    BoardStore::from_config(&BoardConfig {
        seed: false,
        ..BoardConfig::default()
    })
    .unwrap()
}

#[test_log::test]
fn test_activity_logging_end_to_end() {
    let store = empty_store().with_actor("test-user[session123]");

    // Add a list (logged)
    let list = store.execute(&AddList::new("Backlog")).unwrap();
    let list_id = list["id"].as_str().unwrap().to_string();

    // Add a task (logged)
    let result = store
        .execute(&AddTask::new(list_id.as_str(), "First task").with_description("Test task"))
        .unwrap();
    let task_id = result["id"].as_str().unwrap().to_string();

    // Update the task (logged)
    store
        .execute(&UpdateTask::new(task_id.as_str()).with_title("Updated task"))
        .unwrap();

    // Get task (unlogged)
    store.execute(&GetTask::new(task_id.as_str())).unwrap();

    // Move onto its own slot (no-op, unlogged)
    store
        .execute(&MoveTask::new(task_id.as_str(), list_id.as_str(), 0))
        .unwrap();

    let entries = store.activity(usize::MAX);
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].op, "update task"); // Newest first
    assert_eq!(entries[1].op, "add task");
    assert_eq!(entries[2].op, "add list"); // Oldest last

    for entry in &entries {
        assert_eq!(entry.actor, Some("test-user[session123]".to_string()));
        assert!(entry.error().is_none());
    }

    assert_eq!(entries[1].input["title"], "First task");
    assert_eq!(entries[1].output["description"], "Test task");
    assert_eq!(entries[0].output["title"], "Updated task");
}

#[test_log::test]
fn test_unknown_ids_are_not_logged() {
    let store = empty_store();
    store.add_list("Only").unwrap();

    store.delete_task("missing").unwrap();
    store.move_task("missing", "nowhere", 0).unwrap();
    store.update_list_title("nowhere", "x").unwrap();

    let entries = store.activity(usize::MAX);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].op, "add list");
    assert!(entries[0].actor.is_none());
}

#[test_log::test]
fn test_failed_reorder_is_logged_with_error() {
    let store = empty_store();
    store.add_list("A").unwrap();

    assert!(store.reorder_lists(["not-a-list"]).is_err());

    let entries = store.activity(1);
    assert_eq!(entries[0].op, "reorder lists");
    assert!(entries[0]
        .error()
        .unwrap()
        .contains("invalid list permutation"));
}

#[test_log::test]
fn test_processor_entries_serialize() {
    let mut board = taskboard::default_board();
    let processed = BoardOperationProcessor::with_actor("cli")
        .process(&AddList::new("Review"), &mut board)
        .unwrap();

    let json = serde_json::to_value(processed.log_entry.unwrap()).unwrap();
    assert_eq!(json["op"], "add list");
    assert_eq!(json["actor"], "cli");
    assert!(json["timestamp"].is_string());
    assert!(json["duration_ms"].is_u64());
}
