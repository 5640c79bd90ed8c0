//! 图配置

/// 可达性遍历顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// 深度优先（先序，邻接表插入顺序决定分支先后）
    #[default]
    DepthFirst,
    /// 广度优先
    BreadthFirst,
}

/// 图配置
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// 预分配的顶点容量
    pub initial_capacity: usize,
    /// `reached_from` 与 `connected_components` 使用的遍历顺序
    pub traversal: TraversalOrder,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            traversal: TraversalOrder::DepthFirst,
        }
    }
}

impl GraphConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_traversal(mut self, order: TraversalOrder) -> Self {
        self.traversal = order;
        self
    }
}
