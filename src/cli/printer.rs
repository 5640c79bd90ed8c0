//! 结果打印器
//!
//! 提供表格和垂直格式的图内容输出

use crate::graph::{Graph, VertexData};
use prettytable::{format, row, Cell, Row, Table};
use std::fmt::Display;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 打印通用结果
    pub fn print_result(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        if columns.is_empty() || rows.is_empty() {
            return "Empty set\n".to_string();
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(columns, rows),
            PrintMode::Vertical => self.format_vertical(columns, rows),
        };

        format!("{}\n{} row(s) in set\n", output, rows.len())
    }

    /// 打印每个顶点的邻接表
    pub fn print_adjacency<D>(&self, graph: &Graph<D>) -> String
    where
        D: VertexData + Display,
    {
        let columns = vec!["Vertex".to_string(), "Degree".to_string(), "Edges".to_string()];
        let rows: Vec<Vec<String>> = graph
            .iter()
            .map(|entry| {
                let edges: Vec<String> = entry.edges().iter().map(|e| e.to_string()).collect();
                vec![
                    entry.data().to_string(),
                    entry.degree().to_string(),
                    edges.join("\n"),
                ]
            })
            .collect();
        self.print_result(&columns, &rows)
    }

    /// 打印可达集合
    pub fn print_reached<D: Display>(&self, start: &D, reached: &[D]) -> String {
        let columns = vec!["Start".to_string(), "Reached".to_string()];
        let rows = vec![vec![start.to_string(), join(reached)]];
        self.print_result(&columns, &rows)
    }

    /// 打印连通分量
    pub fn print_components<D: Display>(&self, components: &[Vec<D>]) -> String {
        let columns = vec![
            "Component".to_string(),
            "Size".to_string(),
            "Vertices".to_string(),
        ];
        let rows: Vec<Vec<String>> = components
            .iter()
            .enumerate()
            .map(|(i, c)| vec![(i + 1).to_string(), c.len().to_string(), join(c)])
            .collect();
        self.print_result(&columns, &rows)
    }

    /// 表格格式
    fn format_table(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();

        // 设置表格格式
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        // 添加表头
        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        // 添加数据行
        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize, components: usize) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.add_row(row!["Components", components.to_string()]);
        table.to_string()
    }
}

fn join<D: Display>(values: &[D]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
