//! Business logic services
//!
//! Services validate incoming snapshots and coordinate the shared
//! analytics engine. They hold no state of their own.

pub mod achievements;
pub mod planner;
pub mod progress;
pub mod training;

pub use achievements::AchievementService;
pub use planner::PlannerService;
pub use progress::ProgressService;
pub use training::TrainingService;
