//! adjgraph 演示程序
//!
//! 用命令行给出的整数顶点和边构建图，打印邻接表、可达集合和连通分量

use adjgraph::cli::{PrintMode, Printer};
use adjgraph::{Graph, GraphConfig, TraversalOrder};
use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "adjgraph-demo")]
#[command(about = "adjgraph 无向图演示")]
struct Args {
    /// 顶点列表，逗号分隔
    #[arg(short, long, value_delimiter = ',', default_values_t = [1, 2, 3])]
    vertices: Vec<i64>,

    /// 边列表，形如 1:2，逗号分隔
    #[arg(short, long, value_delimiter = ',', default_values_t = ["1:2".to_string(), "1:3".to_string()])]
    edges: Vec<String>,

    /// 可达性查询的起点（默认逐个顶点查询）
    #[arg(short, long)]
    from: Option<i64>,

    /// 遍历顺序
    #[arg(short, long, value_enum, default_value = "dfs")]
    order: Order,

    /// 垂直显示结果
    #[arg(long)]
    vertical: bool,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Order {
    Dfs,
    Bfs,
}

impl From<Order> for TraversalOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Dfs => TraversalOrder::DepthFirst,
            Order::Bfs => TraversalOrder::BreadthFirst,
        }
    }
}

fn parse_edge(text: &str) -> Result<(i64, i64)> {
    let Some((a, b)) = text.split_once(':') else {
        bail!("无效的边 '{}'，应为 <顶点>:<顶点>", text);
    };
    let a = a.trim().parse().with_context(|| format!("无效的端点 '{}'", a))?;
    let b = b.trim().parse().with_context(|| format!("无效的端点 '{}'", b))?;
    Ok((a, b))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("无效的日志级别")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = GraphConfig::default()
        .with_capacity(args.vertices.len())
        .with_traversal(args.order.into());
    let mut graph = Graph::with_config(config);

    for &v in &args.vertices {
        graph
            .add_vertex(v)
            .with_context(|| format!("添加顶点 {} 失败", v))?;
    }
    for raw in &args.edges {
        let (a, b) = parse_edge(raw)?;
        graph
            .add_edge(a, b)
            .with_context(|| format!("添加边 {} 失败", raw))?;
    }
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "图构建完成"
    );

    let mode = if args.vertical {
        PrintMode::Vertical
    } else {
        PrintMode::Table
    };
    let printer = Printer::new(mode);

    println!("顶点: {:?}", graph.get_vertices());
    println!();
    println!("邻接表:");
    print!("{}", printer.print_adjacency(&graph));

    let starts = match args.from {
        Some(v) => vec![v],
        None => graph.get_vertices(),
    };
    println!();
    println!("可达集合:");
    for start in starts {
        let reached = graph.reached_from(&start)?;
        print!("{}", printer.print_reached(&start, &reached));
    }

    let components = graph.connected_components()?;
    println!();
    println!("连通分量:");
    print!("{}", printer.print_components(&components));

    println!();
    println!(
        "{}",
        printer.print_stats(graph.vertex_count(), graph.edge_count(), components.len())
    );

    Ok(())
}
