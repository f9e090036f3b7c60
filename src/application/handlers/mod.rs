//! Command and query handlers.

mod recommendation;

pub use recommendation::{
    ApplyRecommendationCommand, ApplyRecommendationHandler, DismissRecommendationCommand,
    DismissRecommendationHandler, GenerateError, GenerateRecommendationsCommand,
    GenerateRecommendationsHandler, GetActiveRecommendationsHandler,
    GetActiveRecommendationsQuery, LifecycleError, UpdateActionItemCommand,
    UpdateActionItemHandler,
};
