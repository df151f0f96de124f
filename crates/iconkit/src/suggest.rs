//! Keyword-to-icon-name suggestions.

/// Curated related icon names for common keywords.
const SUGGESTIONS: &[(&str, &[&str])] = &[
    (
        "user",
        &["user", "users", "user-plus", "user-minus", "user-check", "user-x"],
    ),
    (
        "play",
        &["player-play", "player-pause", "player-stop", "play", "video"],
    ),
    ("star", &["star", "star-filled", "stars"]),
    (
        "layers",
        &["stack-3", "layers-2", "layers-intersect", "layout-grid"],
    ),
    ("book", &["book", "book-2", "books", "notebook"]),
    ("video", &["video", "device-tv", "player-play", "camera"]),
    ("money", &["currency-dollar", "coin", "credit-card"]),
    ("heart", &["heart", "heart-filled", "mood-heart"]),
    ("settings", &["settings", "adjustments", "tool"]),
    ("shield", &["shield", "shield-check", "security"]),
    ("check", &["check", "circle-check", "square-check"]),
    ("time", &["clock", "history", "calendar"]),
    ("home", &["home", "building", "house"]),
    ("cloud", &["cloud", "cloud-download", "cloud-upload"]),
    ("share", &["share", "external-link", "link"]),
    ("edit", &["edit", "pencil", "brush"]),
    ("delete", &["trash", "x", "circle-x"]),
];

/// Suggest icon names for a keyword.
///
/// Matching is case-insensitive. Unknown keywords yield `keyword`,
/// `keyword-2` and `keyword-3`.
pub fn suggest(keyword: &str) -> Vec<String> {
    let keyword = keyword.to_lowercase();

    if let Some((_, names)) = SUGGESTIONS.iter().find(|(k, _)| *k == keyword) {
        return names.iter().map(|n| n.to_string()).collect();
    }

    vec![
        keyword.clone(),
        format!("{keyword}-2"),
        format!("{keyword}-3"),
    ]
}

/// All keywords with a curated list.
pub fn known_keywords() -> impl Iterator<Item = &'static str> {
    SUGGESTIONS.iter().map(|(k, _)| *k)
}
