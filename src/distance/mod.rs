// ============================================================================
// Distance Module
// Euclidean distance metrics between fixed-length numeric vectors
// ============================================================================
//
// This module provides:
// - euclidean_distance: L2 distance over an optional prefix
// - euclidean_distance_squared: the same without the square root
// - DistanceElement: element trait covering real and complex scalars

mod element;
mod euclidean;

pub use element::DistanceElement;
pub use euclidean::{euclidean_distance, euclidean_distance_squared};
