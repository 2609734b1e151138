// ==========================================
// 技术服务工单控制台 - API 层错误类型
// ==========================================
// 职责: 定义 API 层错误类型,转换仓储错误为用户可读的错误
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::notification::Notification;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("仓储层错误: {0}")]
    Repository(#[from] RepositoryError),

    #[error("内部错误: {0}")]
    Internal(String),
}

/// API 层结果类型
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// 映射为通知值,供外壳直接弹提示
    ///
    /// 输入类错误是用户可纠正的 → warning;
    /// 其余是系统性失败 → danger
    pub fn to_notification(&self) -> Notification {
        match self {
            ApiError::InvalidInput(message) => Notification::warning(message.clone()),
            other => Notification::danger(other.to_string()),
        }
    }
}
