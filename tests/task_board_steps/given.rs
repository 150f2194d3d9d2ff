//! Given steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, split_list};
use rstest_bdd_macros::given;
use todo_board::task::services::EditTaskRequest;

#[given("an empty task board")]
fn empty_task_board(world: &mut TaskBoardWorld) {
    *world = TaskBoardWorld::new();
}

#[given(r#"a task titled "{title}""#)]
fn task_titled(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    world.add(&title)?;
    Ok(())
}

#[given(r#"a tagged task "{title}" with tags "{tags}""#)]
fn tagged_task(
    world: &mut TaskBoardWorld,
    title: String,
    tags: String,
) -> Result<(), eyre::Report> {
    let id = world.add(&title)?;
    let request = EditTaskRequest::new(id, title).with_tags(split_list(&tags));
    eyre::ensure!(world.board.edit(request).is_applied(), "tagging was not applied");
    Ok(())
}
