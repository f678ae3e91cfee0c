use crate::models::SportGroup;
use tracing::debug;

/// Drop events that already started and order the rest by start time
///
/// Applied once per feed load. An event starting exactly at `now` counts as
/// started. Groups are never dropped, but a group left without events starts
/// collapsed.
pub fn normalize(sports: Vec<SportGroup>, now: i64) -> Vec<SportGroup> {
    sports
        .into_iter()
        .map(|mut sport| {
            let before = sport.events.len();
            sport.events.retain(|event| event.start_time > now);
            // Stable, so equal start times keep feed order
            sport.events.sort_by_key(|event| event.start_time);
            sport.collapsed = sport.events.is_empty();

            debug!(
                sport = %sport.id,
                events = sport.events.len(),
                dropped = before - sport.events.len(),
                "Normalized sport group"
            );
            sport
        })
        .collect()
}
