//! 图核心模块
//!
//! 定义顶点、边、邻接记录和图的核心数据结构

mod edge;
mod graph;
mod index;
mod traversal;
mod vertex;

pub use edge::Edge;
pub use graph::{AdjacencyEntry, Graph};
pub use index::VertexIndex;
pub use vertex::{Vertex, VertexData};
