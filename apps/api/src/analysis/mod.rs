// Deterministic analysis pipeline: normalize → segment → keywords → score.
// Every function here is pure and synchronous over in-memory strings — no
// I/O, no shared state — and must be reproducible without a network call.
// The AI provider chain supplies candidate keywords; this module only tests
// presence and computes the score.

pub mod handlers;
pub mod keywords;
pub mod normalizer;
pub mod scorer;
pub mod segmenter;

// Re-export the public API consumed by handlers and the render module.
pub use keywords::{extract_keywords, match_keywords};
pub use normalizer::normalize;
pub use scorer::score;
pub use segmenter::{segment, SectionMap};
