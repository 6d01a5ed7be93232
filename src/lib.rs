//! Enumeration of polyominoes: all connected shapes of `n` unit squares,
//! where shapes count as the same only when one is a rotation of the other.
//! Mirror images are distinct.


pub mod emit;
pub mod enumerate;
pub mod error;
pub mod polyomino;

pub use enumerate::{enumerate, Enumerator};
pub use error::{parse_size, EnumerateError, Result};
pub use polyomino::{Cell, Dim, Polyomino};
