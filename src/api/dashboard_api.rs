// ==========================================
// 技术服务工单控制台 - 驾驶舱 API
// ==========================================
// 职责: 驾驶舱聚合查询 (统计、团队负载、超时列表) 与导航动作
// 架构: API 层 → 引擎层 (统计/负载) + 仓储层 (数据拉取)
// ==========================================

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::api::error::ApiResult;
use crate::domain::action::NavigationAction;
use crate::domain::dashboard::{DashboardStats, WorkloadChartData};
use crate::domain::notification::Notification;
use crate::domain::request::ServiceRequest;
use crate::engine::sla::SlaEngine;
use crate::engine::stats::DashboardStatsEngine;
use crate::engine::workload::WorkloadEngine;
use crate::repository::RequestRepository;

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================

/// 驾驶舱 API
///
/// 职责:
/// 1. 统计快照 (开放/危急/超时工单数、平均解决耗时、SLA 达成率)
/// 2. 团队负载图表数据
/// 3. 危急/超时工单的导航动作
pub struct DashboardApi {
    repo: Arc<dyn RequestRepository>,
    stats_engine: DashboardStatsEngine,
    workload_engine: WorkloadEngine,
}

impl DashboardApi {
    /// 创建新的 DashboardApi 实例
    pub fn new(repo: Arc<dyn RequestRepository>, sla_engine: Arc<SlaEngine>) -> Self {
        Self {
            repo,
            stats_engine: DashboardStatsEngine::new(sla_engine),
            workload_engine: WorkloadEngine::new(),
        }
    }

    // ==========================================
    // 统计查询
    // ==========================================

    /// 加载驾驶舱统计快照
    pub async fn load_stats(&self, now: DateTime<Utc>) -> ApiResult<DashboardStats> {
        let requests = match self.repo.list_requests().await {
            Ok(requests) => requests,
            Err(e) => {
                warn!("驾驶舱数据加载失败: {}", e);
                return Err(e.into());
            }
        };

        Ok(self.stats_engine.compute(&requests, now))
    }

    /// 刷新驾驶舱
    ///
    /// 重新加载统计,并附带刷新成功提示供外壳弹出
    pub async fn refresh(&self, now: DateTime<Utc>) -> ApiResult<(DashboardStats, Notification)> {
        let stats = self.load_stats(now).await?;
        info!(
            open = stats.open_requests,
            breached = stats.sla_breached,
            "驾驶舱已刷新"
        );
        Ok((stats, Notification::dashboard_refreshed()))
    }

    /// 团队负载图表数据
    pub async fn team_workload(&self) -> ApiResult<WorkloadChartData> {
        let teams = self.repo.list_teams().await?;
        let requests = self.repo.list_requests().await?;

        let workloads = self.workload_engine.aggregate(&teams, &requests);
        Ok(self.workload_engine.chart_data(&workloads))
    }

    /// 当前 SLA 已超时的未关闭工单列表
    pub async fn list_breached(&self, now: DateTime<Utc>) -> ApiResult<Vec<ServiceRequest>> {
        let requests = self.repo.list_requests().await?;
        Ok(self
            .stats_engine
            .breached_requests(&requests, now)
            .into_iter()
            .cloned()
            .collect())
    }

    // ==========================================
    // 导航动作 (由外部动作服务执行)
    // ==========================================

    /// 查看危急工单列表的导航动作
    pub fn critical_requests_action(&self) -> NavigationAction {
        NavigationAction::critical_requests()
    }

    /// 查看 SLA 超时工单列表的导航动作
    pub fn breached_requests_action(&self) -> NavigationAction {
        NavigationAction::breached_requests()
    }
}
