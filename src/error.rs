//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("顶点已存在: {0}")]
    VertexAlreadyExists(String),

    #[error("顶点不存在: {0}")]
    VertexDoesNotExist(String),

    /// 向边询问"另一端"时，给定顶点不是该边的端点
    #[error("边 {edge} 不包含顶点 {vertex}")]
    EdgeDoesNotContainVertex { edge: String, vertex: String },
}

impl Error {
    pub(crate) fn already_exists<D: std::fmt::Debug>(data: &D) -> Self {
        Error::VertexAlreadyExists(format!("{:?}", data))
    }

    pub(crate) fn does_not_exist<D: std::fmt::Debug>(data: &D) -> Self {
        Error::VertexDoesNotExist(format!("{:?}", data))
    }
}
