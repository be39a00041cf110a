//! Pointer-reactive ripple grid: a DOM-free animation engine plus the frame clock that drives it.

pub mod animation;
pub mod field;
pub mod frame;
pub mod grid;
pub mod pointer;
pub mod pulse;

pub use field::RippleField;
pub use frame::{now_seconds, FrameLoop};
pub use grid::{CellCoord, GridDims};
pub use pointer::{ContainerRect, PointerTracker, RevealMask};
