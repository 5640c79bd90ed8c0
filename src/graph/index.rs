//! 顶点索引
//!
//! 负载值到邻接表位置的内存索引，支持快速查找

use crate::graph::vertex::VertexData;
use std::collections::HashMap;

/// 顶点索引
#[derive(Debug, Clone)]
pub struct VertexIndex<D> {
    /// 负载到邻接表位置的映射
    positions: HashMap<D, usize>,
}

impl<D: VertexData> VertexIndex<D> {
    /// 创建新索引
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// 登记顶点位置，已存在时返回 false 且不覆盖
    pub fn insert(&mut self, data: D, position: usize) -> bool {
        match self.positions.entry(data) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(position);
                true
            }
        }
    }

    /// 查找顶点位置
    pub fn position(&self, data: &D) -> Option<usize> {
        self.positions.get(data).copied()
    }

    pub fn contains(&self, data: &D) -> bool {
        self.positions.contains_key(data)
    }

    /// 获取顶点数量
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl<D: VertexData> Default for VertexIndex<D> {
    fn default() -> Self {
        Self::new()
    }
}
