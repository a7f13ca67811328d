//! Given steps for board move BDD scenarios.

use super::world::{BoardMoveWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use std::sync::Arc;
use teamboard::board::domain::Board;
use teamboard::board::services::BoardMoveService;
use teamboard::task::ports::TaskStore;

#[given(r#"a board with tasks "{first}" and "{second}" in the todo column"#)]
fn board_with_two_todo_tasks(
    world: &mut BoardMoveWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    for title in [&first, &second] {
        let task = BoardMoveWorld::build_task(title);
        run_async(world.store.insert(&task)).wrap_err("seed task for scenario board")?;
        world.tasks_by_title.insert(title.clone(), task);
    }

    let listing = run_async(world.store.list_all()).wrap_err("list seeded tasks")?;
    let board = Board::project(listing);
    world.initial_board = Some(board.clone());
    world.coordinator = Some(BoardMoveService::new(
        Arc::new(world.store.clone()),
        board,
    ));
    Ok(())
}

#[given(r#"the acting user is an assignee of "{title}""#)]
fn acting_user_is_assignee(
    world: &mut BoardMoveWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let task = world
        .tasks_by_title
        .get(&title)
        .ok_or_else(|| eyre::eyre!("scenario board has no task titled {title}"))?;
    eyre::ensure!(
        task.has_assignee(&BoardMoveWorld::assignee()),
        "fixture task should carry the fixture assignee"
    );
    world.actor = Some(BoardMoveWorld::assignee());
    Ok(())
}

#[given(r#"the acting user is unrelated to "{title}""#)]
fn acting_user_is_unrelated(
    world: &mut BoardMoveWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let task = world
        .tasks_by_title
        .get(&title)
        .ok_or_else(|| eyre::eyre!("scenario board has no task titled {title}"))?;
    let outsider = BoardMoveWorld::outsider();
    eyre::ensure!(
        !task.permits_change_by(&outsider),
        "fixture outsider should hold no rights on the task"
    );
    world.actor = Some(outsider);
    Ok(())
}

#[given("the task store is failing")]
fn task_store_is_failing(world: &mut BoardMoveWorld) {
    world.store.set_failing(true);
}
