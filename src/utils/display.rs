//! Presentation helpers shared by front ends.

pub const DEFAULT_ICON: &str = "🎽";
pub const EXPANDED_INDICATOR: &str = "∧";
pub const COLLAPSED_INDICATOR: &str = "∨";

const SPORT_ICONS: &[(&str, &str)] = &[
    ("FOOT", "⚽️"),
    ("BASK", "🏀"),
    ("TENN", "🎾"),
    ("TABL", "🏓"),
    ("VOLL", "🏐"),
    ("ESPS", "🎮"),
    ("ICEH", "🏒"),
    ("HAND", "🥅"),
    ("BCHV", "🏐"),
    ("SNOO", "🎱"),
    ("BADM", "🏸"),
];

/// Icon for a sport id, or the generic jersey for unknown sports
pub fn sport_icon(sport_id: &str) -> &'static str {
    SPORT_ICONS
        .iter()
        .find(|(id, _)| *id == sport_id)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Split "Home - Away" into one line per competitor
pub fn event_lines(name: &str) -> String {
    name.replace(" - ", "\n")
}

pub fn collapse_indicator(collapsed: bool) -> &'static str {
    if collapsed {
        COLLAPSED_INDICATOR
    } else {
        EXPANDED_INDICATOR
    }
}

pub fn favorite_marker(favorite: bool) -> &'static str {
    if favorite {
        "★"
    } else {
        "☆"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sport_icon() {
        assert_eq!(sport_icon("FOOT"), "⚽️");
        assert_eq!(sport_icon("BADM"), "🏸");
        assert_eq!(sport_icon("VOLL"), sport_icon("BCHV"));
        assert_eq!(sport_icon("CURL"), DEFAULT_ICON);
        assert_eq!(sport_icon("foot"), DEFAULT_ICON);
    }

    #[test]
    fn test_event_lines() {
        assert_eq!(event_lines("Juventus - Paok"), "Juventus\nPaok");
        assert_eq!(event_lines("Nadal-Federer"), "Nadal-Federer");
        assert_eq!(event_lines("A - B - C"), "A\nB\nC");
    }

    #[test]
    fn test_indicators() {
        assert_eq!(collapse_indicator(true), "∨");
        assert_eq!(collapse_indicator(false), "∧");
        assert_eq!(favorite_marker(true), "★");
        assert_eq!(favorite_marker(false), "☆");
    }
}
