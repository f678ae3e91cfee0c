use crate::models::SportGroup;
use crate::utils::normalize::normalize;
use crate::utils::rerank::{toggle_favorite, RerankError};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("no sport at index {0}")]
    UnknownSport(usize),

    #[error("no event with id {0}")]
    UnknownEvent(String),

    #[error(transparent)]
    Rerank(#[from] RerankError),
}

/// The loaded sports and their events, owned by whichever front end shows them
///
/// Built once from a normalized feed. Afterwards only favorite and collapse
/// toggles change it.
#[derive(Debug, Clone, Default)]
pub struct SportsBoard {
    sports: Vec<SportGroup>,
}

impl SportsBoard {
    /// Wrap sport groups that are already normalized
    pub fn new(sports: Vec<SportGroup>) -> Self {
        Self { sports }
    }

    /// Normalize freshly decoded sport groups against `now`
    pub fn from_feed(sports: Vec<SportGroup>, now: i64) -> Self {
        let board = Self::new(normalize(sports, now));
        info!(
            sports = board.sports.len(),
            events = board.event_count(),
            "Loaded sports board"
        );
        board
    }

    pub fn sports(&self) -> &[SportGroup] {
        &self.sports
    }

    pub fn into_sports(self) -> Vec<SportGroup> {
        self.sports
    }

    pub fn sport(&self, sport_index: usize) -> Option<&SportGroup> {
        self.sports.get(sport_index)
    }

    pub fn sport_index(&self, sport_id: &str) -> Option<usize> {
        self.sports.iter().position(|s| s.id == sport_id)
    }

    pub fn event_count(&self) -> usize {
        self.sports.iter().map(|s| s.events.len()).sum()
    }

    /// Toggle the favorite flag of one event and move it into place
    ///
    /// Returns the event's new index inside its sport group.
    pub fn toggle_favorite(
        &mut self,
        sport_index: usize,
        event_index: usize,
    ) -> Result<usize, BoardError> {
        let sport = self
            .sports
            .get_mut(sport_index)
            .ok_or(BoardError::UnknownSport(sport_index))?;
        let new_index = toggle_favorite(&mut sport.events, event_index)?;

        info!(
            sport = %sport.id,
            event = %sport.events[new_index].id,
            favorite = sport.events[new_index].favorite,
            index = event_index,
            new_index,
            "Toggled favorite"
        );
        Ok(new_index)
    }

    /// Toggle an event found by identifier
    ///
    /// Returns the sport index and the event's new index.
    pub fn toggle_favorite_by_id(&mut self, event_id: &str) -> Result<(usize, usize), BoardError> {
        let (sport_index, event_index) = self
            .sports
            .iter()
            .enumerate()
            .find_map(|(i, sport)| sport.position_of(event_id).map(|j| (i, j)))
            .ok_or_else(|| BoardError::UnknownEvent(event_id.to_string()))?;

        let new_index = self.toggle_favorite(sport_index, event_index)?;
        Ok((sport_index, new_index))
    }

    /// Flip a sport group between collapsed and expanded, returning the new state
    pub fn toggle_collapsed(&mut self, sport_index: usize) -> Result<bool, BoardError> {
        let sport = self
            .sports
            .get_mut(sport_index)
            .ok_or(BoardError::UnknownSport(sport_index))?;
        sport.collapsed = !sport.collapsed;
        Ok(sport.collapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::sports_api::decode_feed;

    const FEED: &str = r#"[
        {"i": "FOOT", "d": "SOCCER", "e": [
            {"i": "A", "si": "FOOT", "d": "Ajax - PSV", "tt": 100},
            {"i": "B", "si": "FOOT", "d": "Roma - Lazio", "tt": 50},
            {"i": "C", "si": "FOOT", "d": "Inter - Milan", "tt": 200},
            {"i": "D", "si": "FOOT", "d": "Celtic - Rangers", "tt": -10}
        ]},
        {"i": "SNOO", "d": "SNOOKER", "e": [
            {"i": "S", "si": "SNOO", "d": "Higgins - Trump", "tt": -5}
        ]}
    ]"#;

    fn board() -> SportsBoard {
        SportsBoard::from_feed(decode_feed(FEED.as_bytes()).unwrap(), 0)
    }

    fn ids(board: &SportsBoard, sport_index: usize) -> Vec<&str> {
        board.sports()[sport_index]
            .events
            .iter()
            .map(|e| e.id.as_str())
            .collect()
    }

    #[test]
    fn test_from_feed_normalizes() {
        let board = board();
        assert_eq!(board.sports().len(), 2);
        assert_eq!(ids(&board, 0), vec!["B", "A", "C"]);
        assert!(ids(&board, 1).is_empty());
        assert!(board.sports()[1].collapsed);
        assert_eq!(board.event_count(), 3);
    }

    #[test]
    fn test_toggle_favorite() {
        let mut board = board();
        assert_eq!(board.toggle_favorite(0, 2).unwrap(), 0);
        assert_eq!(ids(&board, 0), vec!["C", "B", "A"]);
        assert_eq!(board.sports()[0].favorite_count(), 1);

        assert_eq!(board.toggle_favorite(0, 0).unwrap(), 2);
        assert_eq!(ids(&board, 0), vec!["B", "A", "C"]);
        assert_eq!(board.sports()[0].favorite_count(), 0);
    }

    #[test]
    fn test_toggle_favorite_by_id() {
        let mut board = board();
        assert_eq!(board.toggle_favorite_by_id("A").unwrap(), (0, 0));
        assert_eq!(ids(&board, 0), vec!["A", "B", "C"]);

        assert_eq!(
            board.toggle_favorite_by_id("D").unwrap_err(),
            BoardError::UnknownEvent("D".to_string())
        );
    }

    #[test]
    fn test_toggle_errors() {
        let mut board = board();
        assert_eq!(
            board.toggle_favorite(5, 0).unwrap_err(),
            BoardError::UnknownSport(5)
        );
        assert_eq!(
            board.toggle_favorite(1, 0).unwrap_err(),
            BoardError::Rerank(RerankError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(
            board.toggle_collapsed(2).unwrap_err(),
            BoardError::UnknownSport(2)
        );
    }

    #[test]
    fn test_toggle_collapsed() {
        let mut board = board();
        let foot = board.sport_index("FOOT").unwrap();
        assert!(!board.sport(foot).unwrap().collapsed);
        assert!(board.toggle_collapsed(foot).unwrap());
        assert!(!board.toggle_collapsed(foot).unwrap());
        assert_eq!(board.sport_index("CURL"), None);
    }
}
