// ==========================================
// 技术服务工单控制台 - 团队负载引擎
// ==========================================
// 职责: 按团队聚合未关闭/待分派工单数,产出图表序列数据
// 图表渲染由外部服务完成
// ==========================================

use crate::domain::dashboard::{ChartSeries, TeamWorkload, WorkloadChartData};
use crate::domain::request::{ServiceRequest, ServiceTeam};
use crate::i18n::t;

// ==========================================
// WorkloadEngine - 团队负载引擎
// ==========================================
pub struct WorkloadEngine {
    // 无状态引擎,不需要注入依赖
}

impl WorkloadEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 按团队聚合负载
    ///
    /// - active: 分派到该团队且阶段非终态
    /// - pending: active 且尚未指定处理人
    ///
    /// 团队顺序与输入一致 (图表横轴稳定)
    pub fn aggregate(
        &self,
        teams: &[ServiceTeam],
        requests: &[ServiceRequest],
    ) -> Vec<TeamWorkload> {
        teams
            .iter()
            .map(|team| {
                let mut active = 0u32;
                let mut pending = 0u32;

                for request in requests.iter().filter(|r| r.is_open()) {
                    if request.team_id.as_deref() != Some(team.team_id.as_str()) {
                        continue;
                    }
                    active += 1;
                    if request.assignee.is_none() {
                        pending += 1;
                    }
                }

                TeamWorkload {
                    team_id: team.team_id.clone(),
                    team_name: team.name.clone(),
                    active_requests: active,
                    pending_requests: pending,
                }
            })
            .collect()
    }

    /// 负载图表数据 (两条序列: 处理中 / 待分派)
    pub fn chart_data(&self, workloads: &[TeamWorkload]) -> WorkloadChartData {
        WorkloadChartData {
            labels: workloads.iter().map(|w| w.team_name.clone()).collect(),
            series: vec![
                ChartSeries {
                    name: t("workload.active"),
                    data: workloads.iter().map(|w| w.active_requests).collect(),
                },
                ChartSeries {
                    name: t("workload.pending"),
                    data: workloads.iter().map(|w| w.pending_requests).collect(),
                },
            ],
        }
    }
}

impl Default for WorkloadEngine {
    fn default() -> Self {
        Self::new()
    }
}
