// ==========================================
// 技术服务工单控制台 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和 API 实例
// ==========================================

use std::sync::Arc;

use crate::api::{DashboardApi, RequestApi};
use crate::config::ConsoleConfig;
use crate::engine::sla::SlaEngine;
use crate::monitor::SlaMonitor;
use crate::repository::{InMemoryRequestStore, RequestRepository};

/// 应用状态
///
/// 包含所有 API 实例和共享资源,在外壳中作为全局状态管理
pub struct AppState {
    /// 控制台配置
    pub config: ConsoleConfig,

    /// SLA 判定引擎 (监控与 API 共享)
    pub sla_engine: Arc<SlaEngine>,

    /// 驾驶舱 API
    pub dashboard_api: Arc<DashboardApi>,

    /// 工单 API
    pub request_api: Arc<RequestApi>,

    /// 工单仓储
    pub repo: Arc<dyn RequestRepository>,
}

impl AppState {
    /// 用内存仓储创建应用状态 (演示与测试)
    pub fn new(config: ConsoleConfig) -> Self {
        Self::with_repository(config, Arc::new(InMemoryRequestStore::new()))
    }

    /// 用指定仓储创建应用状态
    pub fn with_repository(config: ConsoleConfig, repo: Arc<dyn RequestRepository>) -> Self {
        let sla_engine = Arc::new(SlaEngine::from_config(&config.sla));

        let dashboard_api = Arc::new(DashboardApi::new(Arc::clone(&repo), Arc::clone(&sla_engine)));
        let request_api = Arc::new(RequestApi::new(Arc::clone(&repo), Arc::clone(&sla_engine)));

        Self {
            config,
            sla_engine,
            dashboard_api,
            request_api,
            repo,
        }
    }

    /// 按配置创建 SLA 监控 (周期取自配置)
    pub fn sla_monitor(&self) -> SlaMonitor {
        SlaMonitor::new(Arc::clone(&self.sla_engine)).with_interval(self.config.sla.tick_interval())
    }
}
