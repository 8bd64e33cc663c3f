//! Built-in word lists
//!
//! A small default pool so the game runs with zero setup; drop in your own
//! words.txt / solutions.txt for a bigger one.

/// Default answer pool (50 words)
pub const BUILTIN_SOLUTIONS: &[&str] = &[
    "crane", "slate", "adieu", "stare", "store", "raise", "tears", "alone", "pride", "chaos",
    "flame", "glint", "hover", "mirth", "noble", "ocean", "proud", "quake", "radii", "saint",
    "tangy", "ultra", "vivid", "waltz", "xenon", "young", "zesty", "bloom", "candy", "daisy",
    "eager", "fairy", "gamer", "haven", "ionic", "joule", "kitty", "lemon", "mango", "ninja",
    "opera", "piano", "queen", "robot", "sunny", "tiger", "umbra", "vapor", "wharf", "yield",
];

/// Extra acceptable guesses beyond the solutions
pub const BUILTIN_GUESSES: &[&str] = &[
    "about", "other", "which", "there", "their", "would", "these", "thing", "could", "first",
    "sound", "place", "great", "again", "still", "every", "small", "found", "those", "never",
];
