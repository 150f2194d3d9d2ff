//! When steps for task board BDD scenarios.

use super::world::TaskBoardWorld;
use rstest_bdd_macros::when;
use todo_board::task::{
    services::EditTaskRequest,
    view::{SortKey, ViewQuery},
};

#[when(r#"I add a task titled "{title}""#)]
fn add_task(world: &mut TaskBoardWorld, title: String) {
    world.last_outcome = Some(world.board.add(&title));
}

#[when(r#"I add a dated task "{title}" due "{deadline}""#)]
fn add_dated_task(
    world: &mut TaskBoardWorld,
    title: String,
    deadline: String,
) -> Result<(), eyre::Report> {
    let id = world.add(&title)?;
    let request = EditTaskRequest::new(id, title).with_deadline_text(&deadline)?;
    world.last_outcome = Some(world.board.edit(request));
    Ok(())
}

#[when(r#"I delete the task "{title}""#)]
fn delete_task(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    world.last_outcome = Some(world.board.delete(&id));
    Ok(())
}

#[when(r#"I advance "{title}""#)]
fn advance_task(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    world.last_outcome = Some(world.board.advance_status(&id));
    Ok(())
}

#[when(r#"I sort the board by "{key}""#)]
fn sort_board(world: &mut TaskBoardWorld, key: String) -> Result<(), eyre::Report> {
    let sort = SortKey::try_from(key.as_str())?;
    world.query = world.query.clone().with_sort(sort);
    Ok(())
}

#[when(r#"I filter the board by tag "{tag}""#)]
fn filter_by_tag(world: &mut TaskBoardWorld, tag: String) {
    world.query = ViewQuery::new().with_tags([tag]);
}

#[when("the board is reloaded")]
fn reload_board(world: &mut TaskBoardWorld) {
    world.reload();
}
