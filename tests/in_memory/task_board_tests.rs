//! In-memory integration tests for board mutations and views.

use std::sync::Arc;

use chrono::NaiveDate;
use rstest::rstest;
use todo_board::task::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{Priority, TaskStatus},
    services::{EditTaskRequest, MutationOutcome},
    view::{SortKey, StatusFilter, ViewQuery, board_columns},
};

use super::helpers::{add_task, open_board, storage, titles_of};

#[rstest]
fn deadline_sort_puts_undated_tasks_last(
    storage: Arc<InMemoryKeyValueStore>,
) -> eyre::Result<()> {
    let mut board = open_board(&storage);
    add_task(&mut board, "Buy milk")?;
    let report = add_task(&mut board, "Write report")?;
    let due = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or_else(|| eyre::eyre!("invalid date"))?;
    let dated = EditTaskRequest::new(report, "Write report").with_deadline(due);
    eyre::ensure!(board.edit(dated).is_applied());

    let view = board.view(&ViewQuery::new().with_sort(SortKey::Deadline));

    eyre::ensure!(titles_of(view.ordered()) == ["Write report", "Buy milk"]);
    Ok(())
}

#[rstest]
fn deleting_the_only_task_empties_the_board(
    storage: Arc<InMemoryKeyValueStore>,
) -> eyre::Result<()> {
    let mut board = open_board(&storage);
    let id = add_task(&mut board, "Task A")?;

    eyre::ensure!(board.delete(&id).is_applied());

    eyre::ensure!(board.is_empty());
    eyre::ensure!(board.view(&ViewQuery::new()).is_empty());
    Ok(())
}

#[rstest]
fn tag_filter_shows_and_hides_tasks(storage: Arc<InMemoryKeyValueStore>) -> eyre::Result<()> {
    let mut board = open_board(&storage);
    let id = add_task(&mut board, "Plan sprint")?;
    let tagged = EditTaskRequest::new(id, "Plan sprint").with_tags(["work", "urgent"]);
    eyre::ensure!(board.edit(tagged).is_applied());

    let urgent = board.view(&ViewQuery::new().with_tags(["urgent"]));
    let home = board.view(&ViewQuery::new().with_tags(["home"]));

    eyre::ensure!(titles_of(urgent.ordered()) == ["Plan sprint"]);
    eyre::ensure!(home.is_empty());
    Ok(())
}

#[rstest]
fn advancing_moves_tasks_between_columns(
    storage: Arc<InMemoryKeyValueStore>,
) -> eyre::Result<()> {
    let mut board = open_board(&storage);
    let id = add_task(&mut board, "Ship release")?;
    add_task(&mut board, "Stay put")?;

    eyre::ensure!(board.advance_status(&id).is_applied());
    eyre::ensure!(board.advance_status(&id).is_applied());

    let view = board.view(&ViewQuery::new());
    eyre::ensure!(titles_of(view.bucket(TaskStatus::Completed)) == ["Ship release"]);
    eyre::ensure!(titles_of(view.bucket(TaskStatus::Untouched)) == ["Stay put"]);

    eyre::ensure!(board.advance_status(&id).is_applied());
    eyre::ensure!(board.advance_status(&id) == MutationOutcome::Unchanged);
    let archived_only = StatusFilter::Only(TaskStatus::Archived);
    let archived = board.view(&ViewQuery::new().with_status(archived_only));
    eyre::ensure!(titles_of(archived.ordered()) == ["Ship release"]);
    eyre::ensure!(board_columns(StatusFilter::All).len() == 3);
    Ok(())
}

#[rstest]
fn search_and_priority_sort_combine(storage: Arc<InMemoryKeyValueStore>) -> eyre::Result<()> {
    let mut board = open_board(&storage);
    for (title, priority) in [
        ("Review budget", Priority::Low),
        ("Review contract", Priority::High),
        ("Water plants", Priority::High),
    ] {
        let id = add_task(&mut board, title)?;
        let request = EditTaskRequest::new(id, title).with_priority(priority);
        eyre::ensure!(board.edit(request).is_applied());
    }

    let query = ViewQuery::new()
        .with_search("review")
        .with_sort(SortKey::Priority);
    let view = board.view(&query);

    eyre::ensure!(titles_of(view.ordered()) == ["Review contract", "Review budget"]);
    Ok(())
}
