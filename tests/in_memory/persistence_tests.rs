//! In-memory integration tests for reloading boards.

use std::sync::Arc;

use rstest::rstest;
use todo_board::task::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{Priority, TaskStatus},
    ports::KeyValueStore,
    services::EditTaskRequest,
};

use super::helpers::{add_task, open_board, storage};

#[rstest]
fn reopened_board_matches_the_saved_one(
    storage: Arc<InMemoryKeyValueStore>,
) -> eyre::Result<()> {
    let mut board = open_board(&storage);
    let first = add_task(&mut board, "Write report")?;
    add_task(&mut board, "Buy milk")?;
    let edit = EditTaskRequest::new(first, "Write report")
        .with_status(TaskStatus::InProgress)
        .with_description("quarterly")
        .with_deadline_text("2024-01-01")?
        .with_priority(Priority::High)
        .with_tags(["work"]);
    eyre::ensure!(board.edit(edit).is_applied());

    let reopened = open_board(&storage);

    eyre::ensure!(reopened.tasks() == board.tasks());
    Ok(())
}

#[rstest]
fn legacy_collection_loads_with_defaults(
    storage: Arc<InMemoryKeyValueStore>,
) -> eyre::Result<()> {
    storage.set(
        "modern-todo-list",
        r#"[{"id":"1","title":"Old","status":"completed"},
            {"id":"2","title":"Older","status":"untouched","tags":null,"priority":""}]"#,
    )?;

    let board = open_board(&storage);

    eyre::ensure!(board.len() == 2);
    eyre::ensure!(board.tasks().iter().all(|task| task.priority() == Priority::None));
    eyre::ensure!(board.tasks().iter().all(|task| task.tags().is_empty()));
    eyre::ensure!(board.all_tags().is_empty());
    Ok(())
}

#[rstest]
fn corrupt_collection_opens_empty_and_recovers(
    storage: Arc<InMemoryKeyValueStore>,
) -> eyre::Result<()> {
    storage.set("modern-todo-list", "not json at all")?;

    let mut board = open_board(&storage);
    eyre::ensure!(board.is_empty());

    add_task(&mut board, "Fresh start")?;
    let reopened = open_board(&storage);
    eyre::ensure!(reopened.len() == 1);
    Ok(())
}
