// ==========================================
// 技术服务工单控制台 - 驾驶舱统计引擎
// ==========================================
// 职责: 驾驶舱指标生成
// 输入: 工单列表 + 调用方注入的当前时刻
// 输出: DashboardStats 快照
// ==========================================

use crate::domain::dashboard::DashboardStats;
use crate::domain::request::ServiceRequest;
use crate::domain::types::{PriorityLevel, SlaState};
use crate::engine::sla::SlaEngine;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::instrument;

// ==========================================
// DashboardStatsEngine - 驾驶舱统计引擎
// ==========================================
pub struct DashboardStatsEngine {
    sla_engine: Arc<SlaEngine>,
}

impl DashboardStatsEngine {
    /// 构造函数
    pub fn new(sla_engine: Arc<SlaEngine>) -> Self {
        Self { sla_engine }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成驾驶舱统计快照
    ///
    /// 指标口径:
    /// - open: 阶段非终态
    /// - critical: open 且优先级 P1
    /// - sla_breached: open 且截止状态为 Breached
    /// - avg_resolution_hours: 已关闭工单的平均解决耗时
    /// - sla_compliance_pct: "已关闭且有截止时间"工单中按期解决的占比;
    ///   无此类工单时为 100.0
    #[instrument(skip(self, requests), fields(count = requests.len()))]
    pub fn compute(&self, requests: &[ServiceRequest], now: DateTime<Utc>) -> DashboardStats {
        let mut open_requests = 0u32;
        let mut critical_requests = 0u32;
        let mut sla_breached = 0u32;

        for request in requests.iter().filter(|r| r.is_open()) {
            open_requests += 1;
            if request.priority == PriorityLevel::P1 {
                critical_requests += 1;
            }
            if self.sla_engine.evaluate(request.sla_deadline, now).state == SlaState::Breached {
                sla_breached += 1;
            }
        }

        DashboardStats {
            open_requests,
            critical_requests,
            sla_breached,
            avg_resolution_hours: Self::avg_resolution_hours(requests),
            sla_compliance_pct: Self::sla_compliance_pct(requests),
            generated_at: now,
        }
    }

    /// 当前处于 Breached 状态的未关闭工单
    pub fn breached_requests<'a>(
        &self,
        requests: &'a [ServiceRequest],
        now: DateTime<Utc>,
    ) -> Vec<&'a ServiceRequest> {
        requests
            .iter()
            .filter(|r| {
                r.is_open()
                    && self.sla_engine.evaluate(r.sla_deadline, now).state == SlaState::Breached
            })
            .collect()
    }

    // ==========================================
    // 指标计算
    // ==========================================

    /// 平均解决耗时 (小时)
    fn avg_resolution_hours(requests: &[ServiceRequest]) -> f64 {
        let durations: Vec<f64> = requests
            .iter()
            .filter_map(|r| r.resolution_hours())
            .collect();

        if durations.is_empty() {
            return 0.0;
        }
        durations.iter().sum::<f64>() / durations.len() as f64
    }

    /// SLA 达成率 (百分比)
    fn sla_compliance_pct(requests: &[ServiceRequest]) -> f64 {
        let outcomes: Vec<bool> = requests
            .iter()
            .filter_map(|r| r.resolved_within_sla())
            .collect();

        if outcomes.is_empty() {
            // 无可评估工单时不报告违约
            return 100.0;
        }

        let on_time = outcomes.iter().filter(|&&ok| ok).count();
        on_time as f64 / outcomes.len() as f64 * 100.0
    }
}
