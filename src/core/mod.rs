//! Core data types for skill-based team matching.
//!
//! - [`SkillSet`]: A deduplicated set of case-folded skill names
//! - [`Team`], [`TeamId`]: A candidate team and its opaque identifier
//! - [`RecommendRequest`]: The wire request, validated into domain types
//!
//! ## Skill Comparison
//!
//! Skills compare case-insensitively by lower-casing only. No trimming, no
//! aliasing and no fuzzy matching is applied:
//!
//! | User skill | Team skill | Match |
//! |------------|------------|-------|
//! | Python     | python     | yes   |
//! | PYTHON     | Python     | yes   |
//! | " python"  | python     | no    |
//! | JS         | JavaScript | no    |

pub mod request;
pub mod skills;
pub mod team;

pub use request::{RecommendRequest, RequestError, TeamRecord, ValidatedRequest};
pub use skills::SkillSet;
pub use team::{Team, TeamId};
