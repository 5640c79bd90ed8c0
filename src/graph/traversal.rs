//! 可达性遍历
//!
//! 显式工作栈/队列实现的遍历，不依赖调用栈深度。深度优先时的访问顺序
//! 与递归先序一致：先访问顶点，再按邻接表插入顺序展开邻居。

use super::graph::Graph;
use super::vertex::VertexData;
use crate::config::TraversalOrder;
use crate::error::Result;
use std::collections::VecDeque;

/// 从 `start` 出发遍历其连通分量，返回按访问顺序排列的位置
///
/// `visited` 以邻接表位置为下标，调用方可以在多次遍历间复用它来划分连通分量。
pub(crate) fn walk<D: VertexData>(
    graph: &Graph<D>,
    start: usize,
    order: TraversalOrder,
    visited: &mut [bool],
) -> Result<Vec<usize>> {
    match order {
        TraversalOrder::DepthFirst => depth_first(graph, start, visited),
        TraversalOrder::BreadthFirst => breadth_first(graph, start, visited),
    }
}

fn depth_first<D: VertexData>(
    graph: &Graph<D>,
    start: usize,
    visited: &mut [bool],
) -> Result<Vec<usize>> {
    let mut reached = Vec::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        reached.push(current);

        // 逆序压栈，使第一条边对应的邻居最先弹出
        for edge in graph.entry(current).edges().iter().rev() {
            let next = graph.neighbor_position(current, edge)?;
            if !visited[next] {
                stack.push(next);
            }
        }
    }

    Ok(reached)
}

fn breadth_first<D: VertexData>(
    graph: &Graph<D>,
    start: usize,
    visited: &mut [bool],
) -> Result<Vec<usize>> {
    let mut reached = Vec::new();
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        reached.push(current);
        for edge in graph.entry(current).edges() {
            let next = graph.neighbor_position(current, edge)?;
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    Ok(reached)
}
