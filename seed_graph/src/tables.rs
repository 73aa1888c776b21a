//! Authored content tables for the default seed graph.
//!
//! Pure data. These are turned into owned values by the `authored_*`
//! functions and handed to the compiler as explicit configuration.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::{GlyphTable, StarterSet};
use crate::domain::{Difficulty, Recipe, Rule, Target, VocabularyEntry};

// ── Rule table ─────────────────────────────────────────────────────

/// `(left, right, result, emoji, tags)` in authoring order.
const PAIRS: &[(&str, &str, &str, &str, &[&str])] = &[
    ("fire", "water", "steam", "♨️", &["elements"]),
    ("fire", "air", "energy", "⚡", &["elements"]),
    ("fire", "earth", "lava", "🌋", &["elements"]),
    ("water", "earth", "mud", "🪣", &["elements"]),
    ("water", "air", "mist", "🌫️", &["elements"]),
    ("earth", "air", "seed", "🌱", &["nature"]),
    ("mud", "air", "clay", "🟫", &["craft"]),
    ("clay", "fire", "pottery", "🏺", &["target", "target:pottery"]),
    ("clay", "kiln", "pottery", "🏺", &["target", "target:pottery"]),
    ("mud", "energy", "brick", "🧱", &["craft"]),
    ("brick", "air", "kiln", "🏚️", &["craft"]),
    ("mud", "fire", "ember", "🔥", &["nature"]),
    ("ember", "air", "campfire", "🏕️", &["target", "target:campfire"]),
    ("tree", "fire", "campfire", "🏕️", &["target", "target:campfire"]),
    ("wood", "fire", "campfire", "🏕️", &["target", "target:campfire"]),
    ("seed", "water", "sprout", "🌿", &["nature"]),
    ("sprout", "water", "tree", "🌳", &["nature"]),
    ("tree", "air", "wood", "🪵", &["nature"]),
    ("energy", "air", "wind", "💨", &["elements"]),
    ("wind", "earth", "windmill", "🌾", &["target", "target:windmill"]),
    ("wind", "wood", "windmill", "🌾", &["target", "target:windmill"]),
    ("sprout", "earth", "plant", "🪴", &["nature"]),
    ("plant", "water", "garden", "🌼", &["nature"]),
    ("sprout", "mist", "plant", "🪴", &["nature"]),
    ("energy", "earth", "sand", "🏖️", &["nature"]),
    ("sand", "fire", "glass", "🪟", &["craft"]),
    ("energy", "glass", "sunlight", "☀️", &["nature"]),
    ("garden", "glass", "greenhouse", "🏡", &["target", "target:greenhouse"]),
    ("garden", "sunlight", "greenhouse", "🏡", &["target", "target:greenhouse"]),
    ("lava", "air", "metal", "⛏️", &["industry"]),
    ("metal", "energy", "magnet", "🧲", &["industry"]),
    ("magnet", "sand", "lodestone", "🪨", &["industry"]),
    ("lodestone", "wood", "compass", "🧭", &["target", "target:compass"]),
    ("lodestone", "glass", "compass", "🧭", &["target", "target:compass"]),
    ("brick", "brick", "tower", "🗼", &["structure"]),
    ("glass", "metal", "lens", "🔍", &["science"]),
    ("lava", "water", "stone", "🪨", &["nature"]),
    ("lens", "tower", "observatory", "🔭", &["target", "target:observatory"]),
    ("lens", "stone", "observatory", "🔭", &["target", "target:observatory"]),
    ("plant", "plant", "grove", "🌳", &["nature"]),
    ("grove", "water", "forest", "🌲", &["nature"]),
    ("seed", "energy", "life", "💫", &["nature"]),
    ("life", "water", "fauna", "🦋", &["nature"]),
    ("fauna", "plant", "animals", "🐾", &["nature"]),
    ("forest", "animals", "ecosystem", "🌍", &["target", "target:ecosystem"]),
    ("forest", "life", "ecosystem", "🌍", &["target", "target:ecosystem"]),
    ("metal", "mist", "wire", "🧵", &["industry"]),
    ("wire", "glass", "circuit", "🔌", &["industry"]),
    ("circuit", "metal", "machine", "⚙️", &["industry"]),
    ("mist", "energy", "thought", "💭", &["mind"]),
    ("thought", "energy", "intelligence", "🧠", &["mind"]),
    ("machine", "intelligence", "robotics", "🤖", &["target", "target:robotics"]),
    ("machine", "circuit", "robotics", "🤖", &["target", "target:robotics"]),
    ("wind", "fire", "thrust", "💥", &["industry"]),
    ("thrust", "metal", "engine", "🔧", &["industry"]),
    ("engine", "circuit", "rocket", "🚀", &["industry"]),
    ("engine", "wind", "rocket", "🚀", &["industry"]),
    ("sunlight", "air", "sky", "🌤️", &["nature"]),
    ("sky", "wind", "orbit", "🌀", &["space"]),
    ("rocket", "orbit", "satellite", "🛰️", &["target", "target:satellite"]),
    ("energy", "energy", "pulse", "💓", &["mind"]),
    ("pulse", "glass", "time", "⏳", &["mind"]),
    ("rocket", "signal", "satellite", "🛰️", &["target", "target:satellite"]),
    ("pulse", "wind", "signal", "📡", &["space"]),
    ("steam", "air", "sound", "🔊", &["culture"]),
    ("life", "air", "emotion", "❤️", &["culture"]),
    ("sound", "emotion", "music", "🎶", &["culture"]),
    ("wood", "seed", "village", "🏘️", &["culture"]),
    ("village", "village", "community", "🧑‍🤝‍🧑", &["culture"]),
    ("music", "community", "orchestra", "🎻", &["culture"]),
    ("orchestra", "time", "symphony", "🎼", &["target", "target:symphony"]),
    ("orchestra", "emotion", "symphony", "🎼", &["target", "target:symphony"]),
];

// ── Target table ───────────────────────────────────────────────────

const TARGETS: &[(&str, &str, Difficulty, &[(&str, &str)])] = &[
    ("pottery", "🏺", Difficulty::Easy, &[("clay", "fire"), ("clay", "kiln")]),
    ("campfire", "🏕️", Difficulty::Easy, &[("ember", "air"), ("tree", "fire"), ("wood", "fire")]),
    ("windmill", "🌾", Difficulty::Easy, &[("wind", "earth"), ("wind", "wood")]),
    ("greenhouse", "🏡", Difficulty::Medium, &[("garden", "glass"), ("garden", "sunlight")]),
    ("compass", "🧭", Difficulty::Medium, &[("lodestone", "wood"), ("lodestone", "glass")]),
    ("observatory", "🔭", Difficulty::Medium, &[("lens", "tower"), ("lens", "stone")]),
    ("ecosystem", "🌍", Difficulty::Hard, &[("forest", "animals"), ("forest", "life")]),
    ("robotics", "🤖", Difficulty::Hard, &[("machine", "intelligence"), ("machine", "circuit")]),
    ("satellite", "🛰️", Difficulty::Hard, &[("rocket", "orbit"), ("rocket", "signal")]),
    ("symphony", "🎼", Difficulty::Hard, &[("orchestra", "time"), ("orchestra", "emotion")]),
];

// ── Glyph table ────────────────────────────────────────────────────

const GLYPHS: &[(&str, &str)] = &[
    ("fire", "🔥"),
    ("water", "💧"),
    ("earth", "🌍"),
    ("air", "🌬️"),
    ("steam", "♨️"),
    ("energy", "⚡"),
    ("lava", "🌋"),
    ("mud", "🪣"),
    ("mist", "🌫️"),
    ("seed", "🌱"),
    ("clay", "🟫"),
    ("brick", "🧱"),
    ("kiln", "🏚️"),
    ("pottery", "🏺"),
    ("ember", "🔥"),
    ("campfire", "🏕️"),
    ("sprout", "🌿"),
    ("tree", "🌳"),
    ("wood", "🪵"),
    ("wind", "💨"),
    ("windmill", "🌾"),
    ("plant", "🪴"),
    ("garden", "🌼"),
    ("sand", "🏖️"),
    ("glass", "🪟"),
    ("sunlight", "☀️"),
    ("metal", "⛏️"),
    ("magnet", "🧲"),
    ("lodestone", "🪨"),
    ("compass", "🧭"),
    ("tower", "🗼"),
    ("lens", "🔍"),
    ("stone", "🪨"),
    ("observatory", "🔭"),
    ("grove", "🌳"),
    ("forest", "🌲"),
    ("life", "💫"),
    ("fauna", "🦋"),
    ("animals", "🐾"),
    ("ecosystem", "🌍"),
    ("wire", "🧵"),
    ("circuit", "🔌"),
    ("machine", "⚙️"),
    ("thought", "💭"),
    ("intelligence", "🧠"),
    ("robotics", "🤖"),
    ("thrust", "💥"),
    ("engine", "🔧"),
    ("rocket", "🚀"),
    ("sky", "🌤️"),
    ("orbit", "🌀"),
    ("satellite", "🛰️"),
    ("signal", "📡"),
    ("pulse", "💓"),
    ("time", "⏳"),
    ("sound", "🔊"),
    ("emotion", "❤️"),
    ("music", "🎶"),
    ("village", "🏘️"),
    ("community", "🧑‍🤝‍🧑"),
    ("orchestra", "🎻"),
    ("symphony", "🎼"),
];

/// The four primitives available to the player from the outset.
pub const STARTERS: [&str; 4] = ["fire", "water", "earth", "air"];

const VOCABULARY: &[(&str, &[&str])] = &[
    ("fire", &["flame"]),
    ("water", &["aqua"]),
    ("earth", &["soil"]),
    ("air", &["wind"]),
];

// ── Accessors ──────────────────────────────────────────────────────

pub fn authored_rules() -> Vec<Rule> {
    PAIRS
        .iter()
        .map(|(left, right, result, emoji, tags)| Rule {
            left: left.to_string(),
            right: right.to_string(),
            result: result.to_string(),
            emoji: emoji.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}

pub fn authored_targets() -> Vec<Target> {
    TARGETS
        .iter()
        .map(|(name, emoji, difficulty, recipes)| Target {
            name: name.to_string(),
            emoji: emoji.to_string(),
            difficulty: *difficulty,
            recipes: recipes
                .iter()
                .map(|(left, right)| Recipe::new(*left, *right))
                .collect(),
        })
        .collect()
}

pub fn authored_glyphs() -> GlyphTable {
    GLYPHS
        .iter()
        .map(|(name, glyph)| (name.to_string(), glyph.to_string()))
        .collect::<BTreeMap<_, _>>()
}

pub fn authored_starters() -> StarterSet {
    STARTERS.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>()
}

pub fn authored_vocabulary() -> Vec<VocabularyEntry> {
    VOCABULARY
        .iter()
        .map(|(name, aliases)| VocabularyEntry {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        })
        .collect()
}
