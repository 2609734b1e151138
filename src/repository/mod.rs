// ==========================================
// 技术服务工单控制台 - 仓储层
// ==========================================
// 职责: 定义数据访问接口
// 说明: 真实部署中由 ORM/RPC 通道实现; 本仓库自带内存实现
//       供测试与演示使用,接口即外部协作者的接缝
// ==========================================

pub mod error;
pub mod memory;

pub use error::{RepoResult, RepositoryError};
pub use memory::InMemoryRequestStore;

use crate::domain::request::{ServiceRequest, ServiceTeam};
use async_trait::async_trait;

// ==========================================
// RequestRepository - 工单仓储接口
// ==========================================

/// 工单仓储接口
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// 查询全部工单
    async fn list_requests(&self) -> RepoResult<Vec<ServiceRequest>>;

    /// 查询全部团队
    async fn list_teams(&self) -> RepoResult<Vec<ServiceTeam>>;

    /// 写入新工单,返回落库后的工单
    async fn insert_request(&self, request: ServiceRequest) -> RepoResult<ServiceRequest>;

    /// 取下一个工单编号 (REQ-xxxxx 序列)
    async fn next_request_number(&self) -> RepoResult<String>;
}
