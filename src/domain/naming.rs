//! Repository name generation: word pair plus an optional numeric suffix.

const ADJECTIVES: &[&str] = &[
    "amber", "autumn", "bitter", "bold", "brave", "calm", "crimson", "curly", "dawn", "dry",
    "early", "fancy", "fluent", "fragrant", "frosty", "gentle", "green", "hidden", "icy", "late",
    "lively", "lucky", "misty", "morning", "muddy", "nameless", "patient", "plain", "proud",
    "quiet", "rapid", "restless", "rough", "silent", "snowy", "solitary", "sparkling", "still",
    "summer", "twilight", "wandering", "weathered", "wild", "winter", "young",
];

const NOUNS: &[&str] = &[
    "band", "bird", "breeze", "brook", "bush", "butterfly", "cell", "cherry", "cloud", "darkness",
    "dew", "dream", "dust", "feather", "field", "fire", "firefly", "flower", "fog", "forest",
    "frog", "frost", "glade", "glitter", "grass", "haze", "hill", "lake", "leaf", "meadow", "moon",
    "mountain", "night", "paper", "pine", "pond", "rain", "river", "sea", "shadow", "shape",
    "silence", "sky", "smoke", "snow", "sound", "star", "sun", "surf", "thunder", "tree", "voice",
    "water", "waterfall", "wave", "wind", "wood",
];

/// Generate one candidate repository name.
///
/// Format is `adjective-noun`, roughly half the time followed by a two-digit
/// suffix. Output uses only lowercase letters, digits, and hyphens.
pub fn candidate() -> String {
    let mut rng = fastrand::Rng::new();
    let adjective = ADJECTIVES[rng.usize(..ADJECTIVES.len())];
    let noun = NOUNS[rng.usize(..NOUNS.len())];

    if rng.bool() {
        format!("{adjective}-{noun}-{:02}", rng.u8(..100))
    } else {
        format!("{adjective}-{noun}")
    }
}

/// Generate `count` candidate names for batch display.
pub fn candidates(count: usize) -> Vec<String> {
    (0..count).map(|_| candidate()).collect()
}
