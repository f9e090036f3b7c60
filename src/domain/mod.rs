//! Domain layer: recommendation aggregate, generation context, and rule logic.

pub mod context;
pub mod foundation;
pub mod recommendation;
pub mod rules;
