//! 图数据结构
//!
//! 邻接表表示的无向图：每个不同的顶点对应一条邻接记录，按插入顺序保存。
//! 边在两个端点的邻接表中各存一份，自环只存一份。

use super::edge::Edge;
use super::index::VertexIndex;
use super::traversal;
use super::vertex::{Vertex, VertexData};
use crate::config::{GraphConfig, TraversalOrder};
use crate::error::{Error, Result};
use tracing::{debug, trace};

/// 邻接记录：一个顶点及其关联边（插入顺序，无重复）
#[derive(Debug, Clone)]
pub struct AdjacencyEntry<D> {
    vertex: Vertex<D>,
    edges: Vec<Edge<D>>,
}

impl<D: VertexData> AdjacencyEntry<D> {
    fn new(data: D) -> Self {
        Self {
            vertex: Vertex::new(data),
            edges: Vec::new(),
        }
    }

    pub fn vertex(&self) -> &Vertex<D> {
        &self.vertex
    }

    pub fn data(&self) -> &D {
        self.vertex.data()
    }

    pub fn edges(&self) -> &[Edge<D>] {
        &self.edges
    }

    /// 顶点的度（自环计 1）
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_edge(&self, edge: &Edge<D>) -> bool {
        self.edges.contains(edge)
    }

    /// 追加边，已存在相等的边时不变并返回 false
    fn push_edge(&mut self, edge: Edge<D>) -> bool {
        if self.contains_edge(&edge) {
            return false;
        }
        self.edges.push(edge);
        true
    }
}

/// 无向图
#[derive(Debug, Clone)]
pub struct Graph<D> {
    /// 邻接记录（按顶点插入顺序）
    entries: Vec<AdjacencyEntry<D>>,
    /// 负载到邻接记录位置的索引
    index: VertexIndex<D>,
    /// 不同无向边的数量
    edge_count: usize,
    config: GraphConfig,
}

impl<D: VertexData> Graph<D> {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// 按配置创建空图
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            entries: Vec::with_capacity(config.initial_capacity),
            index: VertexIndex::with_capacity(config.initial_capacity),
            edge_count: 0,
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 已存在相等负载的顶点时返回 [`Error::VertexAlreadyExists`]，图不变。
    pub fn add_vertex(&mut self, data: D) -> Result<()> {
        let position = self.entries.len();
        if !self.index.insert(data.clone(), position) {
            debug!(vertex = ?data, "拒绝添加重复顶点");
            return Err(Error::already_exists(&data));
        }

        debug!(vertex = ?data, position, "添加顶点");
        self.entries.push(AdjacencyEntry::new(data));
        Ok(())
    }

    /// 检查顶点是否存在
    pub fn vertex_exists(&self, data: &D) -> bool {
        self.index.contains(data)
    }

    /// 获取所有顶点（插入顺序的快照）
    pub fn get_vertices(&self) -> Vec<D> {
        self.entries.iter().map(|e| e.data().clone()).collect()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 遍历所有邻接记录
    pub fn iter(&self) -> impl Iterator<Item = &AdjacencyEntry<D>> {
        self.entries.iter()
    }

    // ==================== 边操作 ====================

    /// 添加无向边 `d1 <--> d2`
    ///
    /// 两个端点都必须已存在，否则在任何修改之前返回
    /// [`Error::VertexDoesNotExist`]。重复添加同一条边不会产生副本；
    /// 自环只在该顶点的邻接表中保存一次。
    pub fn add_edge(&mut self, d1: D, d2: D) -> Result<()> {
        let p1 = self.position_of(&d1)?;
        let p2 = self.position_of(&d2)?;

        let edge = Edge::new(d1, d2);
        let inserted = if p1 == p2 {
            self.entries[p1].push_edge(edge)
        } else {
            let inserted = self.entries[p1].push_edge(edge.clone());
            self.entries[p2].push_edge(edge) || inserted
        };

        if inserted {
            self.edge_count += 1;
            debug!(
                a = ?self.entries[p1].data(),
                b = ?self.entries[p2].data(),
                "添加边"
            );
        }
        Ok(())
    }

    /// 边是否存在（无序比较）
    pub fn contains_edge(&self, d1: &D, d2: &D) -> bool {
        match self.index.position(d1) {
            Some(p) => self.entries[p]
                .edges
                .iter()
                .any(|e| e.other_end(d1).map_or(false, |other| other == d2)),
            None => false,
        }
    }

    /// 获取顶点的所有关联边（添加顺序的快照）
    pub fn get_edges_of_vertex(&self, data: &D) -> Result<Vec<Edge<D>>> {
        Ok(self.entry_of(data)?.edges.clone())
    }

    /// 以调用方的边类型返回顶点的关联边
    ///
    /// 每条边按 `(first, second)` 构造，调用方不应假设端点顺序有意义。
    pub fn get_edges_of_vertex_as<E>(&self, data: &D) -> Result<Vec<E>>
    where
        E: From<(D, D)>,
    {
        Ok(self
            .entry_of(data)?
            .edges
            .iter()
            .map(|e| E::from((e.first().clone(), e.second().clone())))
            .collect())
    }

    /// 获取图中所有边，每条无向边只报告一次
    ///
    /// 按较早插入的端点所在位置排序，同一位置内按邻接表顺序。
    pub fn get_all_edges(&self) -> Vec<Edge<D>> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (position, entry) in self.entries.iter().enumerate() {
            for edge in &entry.edges {
                let owner = self
                    .index
                    .position(edge.first())
                    .zip(self.index.position(edge.second()))
                    .map(|(a, b)| a.min(b));
                if owner == Some(position) {
                    edges.push(edge.clone());
                }
            }
        }
        edges
    }

    /// 获取不同无向边的数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的度
    pub fn degree(&self, data: &D) -> Result<usize> {
        Ok(self.entry_of(data)?.degree())
    }

    /// 获取顶点的邻居（按邻接表顺序，自环邻居是自身）
    pub fn neighbors(&self, data: &D) -> Result<Vec<D>> {
        self.entry_of(data)?
            .edges
            .iter()
            .map(|e| e.other_end(data).cloned())
            .collect()
    }

    // ==================== 连通性 ====================

    /// 返回从 `data` 可达的所有顶点（含自身）
    ///
    /// 使用配置中的遍历顺序，默认深度优先先序。
    pub fn reached_from(&self, data: &D) -> Result<Vec<D>> {
        self.reached_from_with(data, self.config.traversal)
    }

    /// 按指定遍历顺序返回从 `data` 可达的所有顶点
    pub fn reached_from_with(&self, data: &D, order: TraversalOrder) -> Result<Vec<D>> {
        let start = self.position_of(data)?;
        let mut visited = vec![false; self.entries.len()];
        let reached = traversal::walk(self, start, order, &mut visited)?;

        trace!(start = ?data, ?order, reached = reached.len(), "可达性遍历完成");
        Ok(self.collect_data(&reached))
    }

    /// 两个顶点是否在同一连通分量中
    pub fn is_connected(&self, d1: &D, d2: &D) -> Result<bool> {
        let target = self.position_of(d2)?;
        let start = self.position_of(d1)?;
        let mut visited = vec![false; self.entries.len()];
        traversal::walk(self, start, self.config.traversal, &mut visited)?;
        Ok(visited[target])
    }

    /// 划分所有连通分量
    ///
    /// 分量按其首个顶点的插入位置排序，分量内部按遍历顺序。
    pub fn connected_components(&self) -> Result<Vec<Vec<D>>> {
        let mut visited = vec![false; self.entries.len()];
        let mut components = Vec::new();

        for start in 0..self.entries.len() {
            if visited[start] {
                continue;
            }
            let reached = traversal::walk(self, start, self.config.traversal, &mut visited)?;
            components.push(self.collect_data(&reached));
        }

        trace!(components = components.len(), "连通分量划分完成");
        Ok(components)
    }

    // ==================== 内部辅助 ====================

    pub(crate) fn entry(&self, position: usize) -> &AdjacencyEntry<D> {
        &self.entries[position]
    }

    /// 解析 `position` 处顶点沿 `edge` 到达的邻居位置
    pub(crate) fn neighbor_position(&self, position: usize, edge: &Edge<D>) -> Result<usize> {
        let other = edge.other_end(self.entries[position].data())?;
        self.position_of(other)
    }

    fn position_of(&self, data: &D) -> Result<usize> {
        self.index.position(data).ok_or_else(|| {
            debug!(vertex = ?data, "顶点不存在");
            Error::does_not_exist(data)
        })
    }

    fn entry_of(&self, data: &D) -> Result<&AdjacencyEntry<D>> {
        let position = self.position_of(data)?;
        Ok(&self.entries[position])
    }

    fn collect_data(&self, positions: &[usize]) -> Vec<D> {
        positions
            .iter()
            .map(|&p| self.entries[p].data().clone())
            .collect()
    }
}

impl<D: VertexData> Default for Graph<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn path_graph() -> Graph<i32> {
        let mut graph = Graph::new();
        graph.add_vertex(1).unwrap();
        graph.add_vertex(2).unwrap();
        graph.add_vertex(3).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 3).unwrap();
        graph
    }

    fn as_set(values: Vec<i32>) -> HashSet<i32> {
        values.into_iter().collect()
    }

    #[test]
    fn test_graph_basic() {
        let mut graph = Graph::new();
        assert!(graph.is_empty());

        graph.add_vertex(1).unwrap();
        graph.add_vertex(2).unwrap();
        graph.add_vertex(3).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(1, 3).unwrap();

        assert_eq!(graph.get_vertices(), vec![1, 2, 3]);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);

        let edges = graph.get_edges_of_vertex(&1).unwrap();
        assert_eq!(edges, vec![Edge::new(1, 2), Edge::new(1, 3)]);
        assert_eq!(graph.get_edges_of_vertex(&3).unwrap(), vec![Edge::new(3, 1)]);

        assert_eq!(graph.reached_from(&1).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_vertices_keep_insertion_order() {
        let mut graph = Graph::new();
        let names = ["io", "cpu", "ram", "dsp", "gpu"];
        for name in names {
            graph.add_vertex(name.to_string()).unwrap();
        }

        for name in names {
            assert!(graph.vertex_exists(&name.to_string()));
        }
        assert!(!graph.vertex_exists(&"pll".to_string()));
        assert_eq!(graph.get_vertices(), names.map(String::from).to_vec());
    }

    #[test]
    fn test_vertices_snapshot_is_independent() {
        let mut graph = path_graph();
        let mut snapshot = graph.get_vertices();
        snapshot.push(99);
        snapshot.clear();

        assert_eq!(graph.get_vertices(), vec![1, 2, 3]);
        graph.add_vertex(4).unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_duplicate_vertex_rejected() {
        let mut graph = path_graph();
        let before = graph.get_vertices();

        assert_eq!(
            graph.add_vertex(2),
            Err(Error::VertexAlreadyExists("2".to_string()))
        );
        assert_eq!(graph.get_vertices(), before);
        assert_eq!(graph.degree(&2).unwrap(), 2);
    }

    #[test]
    fn test_add_edge_is_idempotent() {
        let mut graph = path_graph();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 1).unwrap();

        assert_eq!(graph.get_edges_of_vertex(&1).unwrap(), vec![Edge::new(1, 2)]);
        assert_eq!(
            graph.get_edges_of_vertex(&2).unwrap(),
            vec![Edge::new(1, 2), Edge::new(2, 3)]
        );
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_add_edge_missing_vertex_does_not_mutate() {
        let mut graph = Graph::new();
        graph.add_vertex(1).unwrap();
        graph.add_vertex(2).unwrap();

        assert!(matches!(
            graph.add_edge(1, 9),
            Err(Error::VertexDoesNotExist(_))
        ));
        assert!(matches!(
            graph.add_edge(9, 2),
            Err(Error::VertexDoesNotExist(_))
        ));
        assert!(graph.get_edges_of_vertex(&1).unwrap().is_empty());
        assert!(graph.get_edges_of_vertex(&2).unwrap().is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.vertex_exists(&9));
    }

    #[test]
    fn test_edge_symmetry() {
        let mut graph = Graph::new();
        graph.add_vertex('a').unwrap();
        graph.add_vertex('b').unwrap();
        graph.add_edge('a', 'b').unwrap();

        let expected = Edge::new('a', 'b');
        assert!(graph.get_edges_of_vertex(&'a').unwrap().contains(&expected));
        assert!(graph.get_edges_of_vertex(&'b').unwrap().contains(&expected));
        assert!(graph.contains_edge(&'b', &'a'));
        assert!(!graph.contains_edge(&'a', &'a'));
        assert_eq!(graph.neighbors(&'b').unwrap(), vec!['a']);
    }

    #[test]
    fn test_reachability_closure() {
        let graph = path_graph();
        let expected = as_set(vec![1, 2, 3]);
        for v in [1, 2, 3] {
            let reached = graph.reached_from(&v).unwrap();
            assert_eq!(reached.len(), 3);
            assert_eq!(reached[0], v);
            assert_eq!(as_set(reached), expected);
        }
    }

    #[test]
    fn test_isolated_vertex_reaches_itself() {
        let mut graph = path_graph();
        graph.add_vertex(7).unwrap();
        assert_eq!(graph.reached_from(&7).unwrap(), vec![7]);
    }

    #[test]
    fn test_self_loop() {
        let mut graph = Graph::new();
        graph.add_vertex(5).unwrap();
        graph.add_edge(5, 5).unwrap();
        graph.add_edge(5, 5).unwrap();

        assert_eq!(graph.get_edges_of_vertex(&5).unwrap(), vec![Edge::new(5, 5)]);
        assert_eq!(graph.degree(&5).unwrap(), 1);
        assert_eq!(graph.neighbors(&5).unwrap(), vec![5]);
        assert_eq!(graph.reached_from(&5).unwrap(), vec![5]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.get_all_edges(), vec![Edge::new(5, 5)]);
    }

    #[test]
    fn test_disconnected_components() {
        let mut graph = Graph::new();
        graph.add_vertex(1).unwrap();
        graph.add_vertex(2).unwrap();

        assert_eq!(graph.reached_from(&1).unwrap(), vec![1]);
        assert_eq!(graph.reached_from(&2).unwrap(), vec![2]);
        assert!(!graph.is_connected(&1, &2).unwrap());
        assert_eq!(graph.connected_components().unwrap(), vec![vec![1], vec![2]]);
    }

    #[test]
    fn test_missing_vertex_queries_fail() {
        let empty: Graph<i32> = Graph::new();
        assert!(matches!(
            empty.get_edges_of_vertex(&1),
            Err(Error::VertexDoesNotExist(_))
        ));
        assert!(matches!(
            empty.reached_from(&1),
            Err(Error::VertexDoesNotExist(_))
        ));

        let graph = path_graph();
        assert!(matches!(
            graph.get_edges_of_vertex(&4),
            Err(Error::VertexDoesNotExist(_))
        ));
        assert!(matches!(
            graph.reached_from(&4),
            Err(Error::VertexDoesNotExist(_))
        ));
        assert!(matches!(graph.degree(&4), Err(Error::VertexDoesNotExist(_))));
        assert!(matches!(
            graph.is_connected(&1, &4),
            Err(Error::VertexDoesNotExist(_))
        ));
    }

    #[test]
    fn test_get_all_edges_reports_each_edge_once() {
        let mut graph = Graph::new();
        for v in 1..=5 {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge(3, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 3).unwrap();
        graph.add_edge(4, 4).unwrap();
        graph.add_edge(2, 1).unwrap();

        let all = graph.get_all_edges();
        assert_eq!(
            all,
            vec![
                Edge::new(1, 3),
                Edge::new(1, 2),
                Edge::new(2, 3),
                Edge::new(4, 4)
            ]
        );
        assert_eq!(all.len(), graph.edge_count());
        assert!(Graph::<i32>::new().get_all_edges().is_empty());
    }

    #[test]
    fn test_edges_in_caller_representation() {
        #[derive(Debug, PartialEq)]
        struct Link {
            from: i32,
            to: i32,
        }

        impl From<(i32, i32)> for Link {
            fn from((from, to): (i32, i32)) -> Self {
                Self { from, to }
            }
        }

        let graph = path_graph();
        let links: Vec<Link> = graph.get_edges_of_vertex_as(&2).unwrap();
        assert_eq!(links, vec![Link { from: 1, to: 2 }, Link { from: 2, to: 3 }]);

        let pairs: Vec<(i32, i32)> = graph.get_edges_of_vertex_as(&3).unwrap();
        assert_eq!(pairs, vec![(2, 3)]);
    }

    #[test]
    fn test_connected_components_partition() {
        let mut graph = Graph::new();
        for v in 1..=6 {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge(1, 4).unwrap();
        graph.add_edge(2, 5).unwrap();
        graph.add_edge(5, 6).unwrap();

        assert_eq!(
            graph.connected_components().unwrap(),
            vec![vec![1, 4], vec![2, 5, 6], vec![3]]
        );
        assert!(graph.is_connected(&6, &2).unwrap());
        assert!(graph.is_connected(&3, &3).unwrap());
        assert!(!graph.is_connected(&4, &5).unwrap());
    }

    #[test]
    fn test_iter_entries() {
        let graph = path_graph();
        let degrees: Vec<(i32, usize)> = graph.iter().map(|e| (*e.data(), e.degree())).collect();
        assert_eq!(degrees, vec![(1, 1), (2, 2), (3, 1)]);
        assert_eq!(graph.iter().next().unwrap().vertex(), &Vertex::new(1));
    }
}
