// ==========================================
// 技术服务工单控制台 - 内存工单仓储
// ==========================================
// 职责: RequestRepository 的内存实现
// 用途: 测试与演示; 生产部署替换为 ORM/RPC 实现
// ==========================================

use crate::domain::request::{ServiceRequest, ServiceTeam};
use crate::repository::error::{RepoResult, RepositoryError};
use crate::repository::RequestRepository;
use async_trait::async_trait;
use std::sync::Mutex;

struct StoreInner {
    requests: Vec<ServiceRequest>,
    teams: Vec<ServiceTeam>,
    next_seq: u32,
}

// ==========================================
// InMemoryRequestStore - 内存仓储
// ==========================================
pub struct InMemoryRequestStore {
    inner: Mutex<StoreInner>,
}

impl InMemoryRequestStore {
    /// 创建空仓储
    pub fn new() -> Self {
        Self::with_seed(Vec::new(), Vec::new())
    }

    /// 创建预置数据的仓储
    pub fn with_seed(requests: Vec<ServiceRequest>, teams: Vec<ServiceTeam>) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                requests,
                teams,
                next_seq: 1,
            }),
        }
    }

    fn lock(&self) -> RepoResult<std::sync::MutexGuard<'_, StoreInner>> {
        self.inner
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

impl Default for InMemoryRequestStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RequestRepository for InMemoryRequestStore {
    async fn list_requests(&self) -> RepoResult<Vec<ServiceRequest>> {
        Ok(self.lock()?.requests.clone())
    }

    async fn list_teams(&self) -> RepoResult<Vec<ServiceTeam>> {
        Ok(self.lock()?.teams.clone())
    }

    async fn insert_request(&self, request: ServiceRequest) -> RepoResult<ServiceRequest> {
        let mut inner = self.lock()?;
        inner.requests.push(request.clone());
        Ok(request)
    }

    async fn next_request_number(&self) -> RepoResult<String> {
        let mut inner = self.lock()?;
        let number = format!("REQ-{:05}", inner.next_seq);
        inner.next_seq += 1;
        Ok(number)
    }
}
