//! When steps for board move BDD scenarios.

use super::world::{BoardMoveWorld, run_async};
use rstest_bdd_macros::when;
use teamboard::board::domain::{MoveIntent, Slot};
use teamboard::task::domain::TaskStatus;

#[when(r#""{title}" is dragged from "{source_column}" {source_index:usize} to "{destination_column}" {destination_index:usize}"#)]
fn task_is_dragged(
    world: &mut BoardMoveWorld,
    title: String,
    source_column: String,
    source_index: usize,
    destination_column: String,
    destination_index: usize,
) -> Result<(), eyre::Report> {
    let source_status = TaskStatus::try_from(source_column.as_str())
        .map_err(|err| eyre::eyre!("invalid source column in scenario: {err}"))?;
    let destination_status = TaskStatus::try_from(destination_column.as_str())
        .map_err(|err| eyre::eyre!("invalid destination column in scenario: {err}"))?;
    let task = world
        .tasks_by_title
        .get(&title)
        .ok_or_else(|| eyre::eyre!("scenario board has no task titled {title}"))?;
    let actor = world
        .actor
        .clone()
        .ok_or_else(|| eyre::eyre!("missing acting user in scenario world"))?;
    let coordinator = world
        .coordinator
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing coordinator in scenario world"))?;

    let intent = MoveIntent::new(
        task.id().clone(),
        Slot::new(source_status, source_index),
        Slot::new(destination_status, destination_index),
    );
    match run_async(coordinator.submit(intent, &actor)) {
        Ok(resolution) => world.last_resolution = Some(resolution),
        Err(error) => world.last_error = Some(error),
    }
    Ok(())
}
