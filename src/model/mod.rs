pub mod content;
mod error;
mod graph;
mod pick;
pub mod snapshot;

pub use content::{ContentList, ResolvedEdge, ResolvedGraph};
pub use error::{EdgeNameError, ModelError};
pub use graph::{AddedNode, DemoGraph, Node};
pub use pick::pick_index;
