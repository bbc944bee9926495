#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Ensures the selectors the game views emit stay present in the shared theme
(`ui/assets/theme/main.css`). A substring check is enough to catch a rename in
one place but not the other.

When a component starts relying on a new structural class, add it to
REQUIRED_SELECTORS.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".navbar__link",
    // Buttons & shared task chrome
    ".button {",
    ".button--primary",
    ".task__controls",
    ".task__error",
    ".task__note",
    ".stat--good",
    ".stat--bad",
    // N-back board
    ".nback-grid__cell--active",
    ".nback-grid__cell--correct",
    ".nback-grid__cell--wrong",
    ".nback-feedback--good",
    ".nback-feedback--bad",
    ".nback-reference__dot--on",
    ".nback-info__score--negative",
    ".nback-instructions__action--press",
    ".nback-practice__tip--press",
    ".nback-final__accuracy--good",
    ".nback-final__accuracy--low",
    // Timer bar tones
    ".timer-bar__fill--calm",
    ".timer-bar__fill--warn",
    ".timer-bar__fill--urgent",
    // Alien defense
    ".alien-field",
    ".alien-field__star",
    ".alien--go",
    ".alien--nogo",
    ".alien--exploding",
    ".alien-overlay",
    ".alien-scoreboard",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars) – \
         did the file get truncated or path change?"
    );
}
