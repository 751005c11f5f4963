//! # formcoach-algo - exercise form scoring engine
//!
//! Pure Rust implementation of the pose-to-score analysis used by the
//! formcoach backend:
//!
//! - **Landmark resolution** - name lookup and visibility scoring over a
//!   detected pose
//! - **Per-exercise evaluators** - ordered geometric checks for squat,
//!   push-up, plank and lunge
//! - **Feedback composition** - score tiers, summary sentences and
//!   corrective suggestions
//!
//! ## Design goals
//!
//! - **Pure** - no I/O, no state across calls, safe to invoke concurrently
//! - **Total** - every well-formed input yields a complete result; missing
//!   landmarks and unknown exercises degrade instead of failing
//! - **Tested** - every evaluator and fallback path has unit tests
//!
//! ## Module structure
//!
//! - [`types`] - pose data model, exercise variants, result and error types
//! - [`resolver`] - landmark lookup, visibility score, typed landmark bags
//! - [`engine`] - the `analyze` entry point and input-contract validation
//!
//! ## Usage example
//!
//! ```rust
//! use formcoach_algo::{analyze, Landmark, Pose};
//!
//! let pose = Pose {
//!     landmarks: vec![
//!         Landmark::new("left_hip", 0.45, 0.50, 1.0),
//!         Landmark::new("right_hip", 0.55, 0.50, 1.0),
//!         Landmark::new("left_knee", 0.45, 0.60, 1.0),
//!         Landmark::new("right_knee", 0.55, 0.60, 1.0),
//!     ],
//!     timestamp: 0,
//! };
//!
//! let analysis = analyze("squat", &pose);
//! assert_eq!(analysis.score, 100);
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod engine;
mod exercises;
mod feedback;
pub mod resolver;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export the engine operations
pub use engine::{analyze, validate_exercise, validate_pose};

/// Re-export the visibility score used by the fallback formulas
pub use resolver::visibility_score;

/// Re-export the public data model
pub use types::{Analysis, Exercise, Landmark, Pose, PoseError, PoseResult, MAX_SUGGESTIONS};
