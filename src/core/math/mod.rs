//=========================================================================
// Math Primitives
//
// Minimal 2D math surface for the scene core.
//
// Responsibilities:
// - Provide the `Vector2` value type used by object transforms
// - Keep all operations pure and allocation-free
//
// Notes:
// Anything beyond the 2D vector primitive (matrices, full transforms,
// projections) is out of scope for this crate and belongs to the
// consuming renderer or simulation layer.
//
//=========================================================================

//=== Module Declarations =================================================

mod vector2;

//=== Public API ==========================================================

pub use vector2::{DegenerateVectorError, Vector2};
