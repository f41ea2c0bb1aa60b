//! Team matching engine.
//!
//! - [`recommend`]: Rank teams for a user's skill list
//! - [`MatchingEngine`]: The same computation with the user's skills folded once
//! - [`MatchResult`]: A matched team with its matched skills and score
//!
//! ## Matching Algorithm
//!
//! 1. **Fold**: Lower-case the user's skills into a set
//! 2. **Skip**: Ignore teams with no required skills
//! 3. **Intersect**: Lower-case each team's skills and intersect with the user's set
//! 4. **Rank**: Keep non-empty intersections, stable-sorted by size descending
//!
//! ## Example
//!
//! ```rust
//! use skill_match::{MatchingEngine, Team};
//!
//! let teams = vec![Team::new(1, "Backend", "APIs").with_required_skills(["Rust", "SQL"])];
//! let engine = MatchingEngine::new(&["rust"]);
//!
//! for m in engine.find_matches(&teams) {
//!     println!("{}: {} ({:?})", m.name, m.score, m.matched_skills);
//! }
//! ```

pub mod engine;

pub use engine::{recommend, MatchResult, MatchingEngine};
