use crate::models::Event;
use std::cmp::Ordering;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RerankError {
    #[error("event index {index} out of range for {len} events")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Favorites first, then ascending start time
pub fn favorite_order(a: &Event, b: &Event) -> Ordering {
    b.favorite
        .cmp(&a.favorite)
        .then_with(|| a.start_time.cmp(&b.start_time))
}

/// Move the event at `index` to where the favorite ordering puts it
///
/// The event's favorite flag must already hold its new value. Only that one
/// event moves; every other event keeps its current relative order even if
/// a full sort would shuffle it. Returns the event's new index.
pub fn rerank(events: &mut Vec<Event>, index: usize) -> Result<usize, RerankError> {
    if index >= events.len() {
        return Err(RerankError::IndexOutOfRange {
            index,
            len: events.len(),
        });
    }

    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by(|a, b| favorite_order(a, b));

    let target = &events[index];
    let new_index = sorted
        .iter()
        .position(|event| *event == target)
        .unwrap_or(index);

    if new_index != index {
        let event = events.remove(index);
        events.insert(new_index, event);
    }

    debug!(index, new_index, "Re-ranked event");
    Ok(new_index)
}

/// Flip the favorite flag of the event at `index` and re-rank it
pub fn toggle_favorite(events: &mut Vec<Event>, index: usize) -> Result<usize, RerankError> {
    let len = events.len();
    let event = events
        .get_mut(index)
        .ok_or(RerankError::IndexOutOfRange { index, len })?;
    event.favorite = !event.favorite;
    rerank(events, index)
}
