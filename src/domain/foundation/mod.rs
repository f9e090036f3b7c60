//! Foundation value objects shared across the domain.

mod clock;
mod errors;
mod ids;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::ValidationError;
pub use ids::{ActionItemId, GoalId, RecommendationId, SubjectId, UserId};
