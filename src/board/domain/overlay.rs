//! Display-only priority ordering for a single column.

use crate::task::domain::Task;

/// Returns a display copy of `bucket`, ordered by priority when the
/// toggle is on.
///
/// The sort is stable, so tasks sharing a priority keep their board
/// order. The bucket itself is never mutated and the preview order is
/// never persisted; the board remains the authority for real positions.
#[must_use]
pub fn priority_preview(bucket: &[Task], enabled: bool) -> Vec<Task> {
    let mut preview: Vec<Task> = bucket.to_vec();
    if enabled {
        preview.sort_by_key(|task| task.priority().rank());
    }
    preview
}
