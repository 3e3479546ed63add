// ==========================================
// 装配车间生产跟踪系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,所有错误信息包含显式原因
// 工具: thiserror 派生宏
// ==========================================

use crate::config::ConfigError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("数据校验失败: {0}")]
    ValidationError(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 ConfigError 转换
// 目的: 将配置层的技术错误转换为用户友好的业务错误
// ==========================================
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound(id) => ApiError::NotFound(format!("生成档案(id={})不存在", id)),
            ConfigError::Invalid(msg) => ApiError::ValidationError(msg),
            ConfigError::Io(e) => ApiError::ConfigError(e.to_string()),
            ConfigError::Parse(e) => ApiError::ConfigError(e.to_string()),
            ConfigError::Other(e) => ApiError::Other(e),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
