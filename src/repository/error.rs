// ==========================================
// 技术服务工单控制台 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("记录未找到: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    #[error("存储锁获取失败: {0}")]
    LockError(String),

    #[error("存储访问失败: {0}")]
    StorageError(String),
}

/// 仓储层结果类型
pub type RepoResult<T> = Result<T, RepositoryError>;
