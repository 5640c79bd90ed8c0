//! 边定义
//!
//! 无向边：两个端点构成的无序对，`{a, b} == {b, a}`

use crate::error::{Error, Result};
use crate::graph::vertex::{Vertex, VertexData};
use std::fmt;

/// 无向边
#[derive(Debug, Clone)]
pub struct Edge<D> {
    first: Vertex<D>,
    second: Vertex<D>,
}

impl<D: VertexData> Edge<D> {
    /// 创建新边
    pub fn new(a: D, b: D) -> Self {
        Self {
            first: Vertex::new(a),
            second: Vertex::new(b),
        }
    }

    /// 插入时记录的第一个端点
    pub fn first(&self) -> &D {
        self.first.data()
    }

    /// 插入时记录的第二个端点
    pub fn second(&self) -> &D {
        self.second.data()
    }

    pub fn endpoints(&self) -> (&D, &D) {
        (self.first(), self.second())
    }

    /// 是否为自环
    pub fn is_self_loop(&self) -> bool {
        self.first == self.second
    }

    /// 边是否以 `data` 为端点
    pub fn contains(&self, data: &D) -> bool {
        self.first() == data || self.second() == data
    }

    /// 返回边的另一端
    ///
    /// `v <--> u`：传入 `u` 返回 `v`，反之亦然；自环返回自身。
    pub fn other_end(&self, data: &D) -> Result<&D> {
        if self.first() == data {
            Ok(self.second())
        } else if self.second() == data {
            Ok(self.first())
        } else {
            Err(Error::EdgeDoesNotContainVertex {
                edge: format!("{:?}", self),
                vertex: format!("{:?}", data),
            })
        }
    }

    pub fn into_pair(self) -> (D, D) {
        (self.first.into_data(), self.second.into_data())
    }
}

impl<D: VertexData> PartialEq for Edge<D> {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl<D: VertexData> Eq for Edge<D> {}

impl<D: VertexData> From<(D, D)> for Edge<D> {
    fn from((a, b): (D, D)) -> Self {
        Self::new(a, b)
    }
}

impl<D: VertexData> From<Edge<D>> for (D, D) {
    fn from(edge: Edge<D>) -> Self {
        edge.into_pair()
    }
}

impl<D: fmt::Display> fmt::Display for Edge<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  <--->  {}", self.first, self.second)
    }
}
