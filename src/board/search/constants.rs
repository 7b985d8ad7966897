//! Search constants.
//!
//! Defaults for [`super::SearchConfig`] and the limits on requested depth.

// ============================================================================
// NODE-BUDGET MODE
// ============================================================================

/// Boards the node-budget search may evaluate from the root
pub const DEFAULT_NODE_BUDGET: u64 = 1_000_000;

/// Plies always expanded in node-budget mode, whatever the budget
pub const DEFAULT_MIN_PLY: u32 = 4;

// ============================================================================
// FIXED-DEPTH MODE
// ============================================================================

/// Shallowest fixed depth a collaborator may request
pub const MIN_FIXED_DEPTH: u8 = 1;

/// Deepest fixed depth a collaborator may request
pub const MAX_FIXED_DEPTH: u8 = 4;
