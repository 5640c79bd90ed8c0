//! 顶点定义
//!
//! 顶点只包装一个负载值，身份完全由值相等决定

use std::fmt;
use std::hash::Hash;

/// 顶点负载需要满足的能力
///
/// `Eq` 定义顶点身份，`Hash` 用于顶点索引，`Debug` 用于错误信息与日志，
/// `Clone` 用于边和快照中保存的副本。
pub trait VertexData: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> VertexData for T {}

/// 顶点
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vertex<D> {
    data: D,
}

impl<D: VertexData> Vertex<D> {
    /// 创建新顶点
    pub fn new(data: D) -> Self {
        Self { data }
    }

    /// 获取负载
    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn into_data(self) -> D {
        self.data
    }
}

impl<D: VertexData> From<D> for Vertex<D> {
    fn from(data: D) -> Self {
        Self::new(data)
    }
}

impl<D: fmt::Display> fmt::Display for Vertex<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}
