//! Structural elements module

mod beam;
mod node;
mod support;

pub use beam::{is_aligned, Beam};
pub use node::Node;
pub use support::{Gender, Support};
