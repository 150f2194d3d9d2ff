//! Then steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, split_list};
use rstest_bdd_macros::then;
use todo_board::task::{domain::TaskStatus, services::MutationOutcome};

#[then(r#"the visible titles are "{titles}""#)]
fn visible_titles_are(world: &TaskBoardWorld, titles: String) -> Result<(), eyre::Report> {
    let expected = split_list(&titles);
    let visible = world.visible_titles();
    if visible != expected {
        return Err(eyre::eyre!("expected titles {expected:?}, found {visible:?}"));
    }
    Ok(())
}

#[then("no tasks are visible")]
fn no_tasks_visible(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let visible = world.visible_titles();
    if !visible.is_empty() {
        return Err(eyre::eyre!("expected no visible tasks, found {visible:?}"));
    }
    Ok(())
}

#[then("the board holds {count:u64} tasks")]
fn board_holds(world: &TaskBoardWorld, count: u64) -> Result<(), eyre::Report> {
    let held = u64::try_from(world.board.len())?;
    if held != count {
        return Err(eyre::eyre!("expected {count} tasks, found {held}"));
    }
    Ok(())
}

#[then(r#""{title}" has status "{status}""#)]
fn task_has_status(
    world: &TaskBoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())?;
    let id = world.id_of(&title)?;
    let actual = world
        .board
        .get(&id)
        .map(|task| task.status())
        .ok_or_else(|| eyre::eyre!("task '{title}' disappeared"))?;
    if actual != expected {
        return Err(eyre::eyre!("expected status {expected}, found {actual}"));
    }
    Ok(())
}

#[then(r#"the last change was "{outcome}""#)]
fn last_change_was(world: &TaskBoardWorld, outcome: String) -> Result<(), eyre::Report> {
    let last = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no mutation has been recorded"))?;
    let matches = match outcome.as_str() {
        "applied" => last.is_applied(),
        "rejected" => matches!(last, MutationOutcome::Rejected(_)),
        "not found" => *last == MutationOutcome::NotFound,
        "unchanged" => *last == MutationOutcome::Unchanged,
        other => return Err(eyre::eyre!("unknown outcome '{other}' in scenario")),
    };
    if !matches {
        return Err(eyre::eyre!("expected {outcome} change, found {last:?}"));
    }
    Ok(())
}
