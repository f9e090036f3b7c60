//! The StudyRecommendation aggregate and its building blocks.

mod action_item;
mod metadata;
mod recommendation;
mod types;

pub use action_item::ActionItem;
pub use metadata::{ContextSnapshot, RecommendationMetadata};
pub use recommendation::{ActionItemError, StudyRecommendation, TransitionError};
pub use types::{ActionItemKind, Category, Impact, Priority, RecommendationType};
