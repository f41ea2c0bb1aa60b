//! Centralized request size limits.

use crate::core::request::RequestError;

/// Maximum number of teams accepted in a single request (DOS protection)
pub const MAX_TEAMS: usize = 10_000;

/// Maximum number of skills in the user's list (DOS protection)
///
/// Team skill lists are bounded only by the request body limit.
pub const MAX_USER_SKILLS: usize = 1_000;

/// Check a team count against [`MAX_TEAMS`].
///
/// # Errors
///
/// Returns `RequestError::TooManyTeams` if `count` exceeds the limit.
pub fn check_team_limit(count: usize) -> Result<(), RequestError> {
    if count > MAX_TEAMS {
        Err(RequestError::TooManyTeams {
            count,
            max: MAX_TEAMS,
        })
    } else {
        Ok(())
    }
}

/// Check the user's skill count against [`MAX_USER_SKILLS`].
///
/// # Errors
///
/// Returns `RequestError::TooManySkills` if `count` exceeds the limit.
pub fn check_user_skill_limit(count: usize) -> Result<(), RequestError> {
    if count > MAX_USER_SKILLS {
        Err(RequestError::TooManySkills {
            count,
            max: MAX_USER_SKILLS,
        })
    } else {
        Ok(())
    }
}
