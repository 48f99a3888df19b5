//! Rendering module
//!
//! Reads observation snapshots only; never touches the simulation.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{DrawCommand, Frame, Visuals, frame};
pub use vertex::{Vertex, colors};
