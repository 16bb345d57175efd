//! Scenario projection engine and bond return compounding

mod state;
mod engine;
mod trajectory;
mod returns;

pub use state::{RatingState, RatingTransition, RatingTransitionRule};
pub use engine::{project, ProjectionConfig, ProjectionEngine, ScenarioProjection};
pub use trajectory::MacroTrajectory;
pub use returns::{compound_returns, ReturnSeries, DURATION_FACTOR};

// ============================================================================
// Default Horizon
// ============================================================================
// The built-in scenarios start from 2025 metrics and run five years out.

/// Calendar year of the initial metrics
pub const DEFAULT_BASE_YEAR: i32 = 2025;

/// Number of projected years in the built-in scenarios
pub const DEFAULT_HORIZON: usize = 5;
