//! # skill-match
//!
//! A library and HTTP service for recommending teams to a user based on skills.
//!
//! Given a user's skill list and a set of candidate teams, each with the
//! skills it is looking for, `skill-match` returns the teams that share at
//! least one skill with the user. Each recommendation carries the skills that
//! matched and a score (the number of shared skills), best-first.
//!
//! ## Features
//!
//! - **Case-insensitive matching**: "Python" and "python" are the same skill
//! - **Deterministic ranking**: Score descending, ties kept in input order
//! - **Typed validation**: Malformed teams are rejected with the offending index
//! - **HTTP service**: `POST /recommend` with permissive CORS
//! - **Offline CLI**: Rank teams from a request file
//!
//! ## Example
//!
//! ```rust
//! use skill_match::{recommend, Team};
//!
//! let teams = vec![
//!     Team::new(1, "A", "Data team").with_required_skills(["Python", "Go"]),
//!     Team::new(2, "B", "Web team").with_required_skills(["React", "Node"]),
//!     Team::new(3, "C", "Not hiring"),
//! ];
//!
//! let matches = recommend(&["python", "react"], &teams);
//! assert_eq!(matches.len(), 2);
//!
//! for m in matches {
//!     println!("{}: {} {:?}", m.name, m.score, m.matched_skills);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Skills, teams, and request validation
//! - [`matching`]: The matching engine
//! - [`utils`]: Request size limits
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: HTTP server

pub mod cli;
pub mod core;
pub mod matching;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use core::request::{RecommendRequest, RequestError, TeamRecord, ValidatedRequest};
pub use core::skills::SkillSet;
pub use core::team::{Team, TeamId};
pub use matching::engine::{recommend, MatchResult, MatchingEngine};
