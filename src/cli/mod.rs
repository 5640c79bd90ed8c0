//! 命令行展示模块

pub mod printer;

pub use printer::{PrintMode, Printer};
