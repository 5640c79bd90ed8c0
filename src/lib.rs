//! adjgraph - 泛型内存无向图
//!
//! 为布图规划等需要连通性查询的工具提供的基础数据结构，支持：
//! - 按值相等识别的顶点，无序对表示的无向边
//! - 邻接表查询，边去重与对称存储
//! - 不依赖调用栈深度的可达性遍历与连通分量划分

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use config::{GraphConfig, TraversalOrder};
pub use error::{Error, Result};
pub use graph::{AdjacencyEntry, Edge, Graph, Vertex, VertexData, VertexIndex};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
