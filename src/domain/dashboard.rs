// ==========================================
// 技术服务工单控制台 - 驾驶舱值对象
// ==========================================
// 职责: 驾驶舱统计与团队负载的快照实体
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// DashboardStats - 驾驶舱统计快照
// ==========================================

/// 驾驶舱统计快照
///
/// 每次评估产出新快照,不做增量更新
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// 未关闭工单数
    pub open_requests: u32,

    /// 危急 (P1) 未关闭工单数
    pub critical_requests: u32,

    /// SLA 已超时的未关闭工单数
    pub sla_breached: u32,

    /// 平均解决耗时 (小时, 仅统计已关闭工单)
    pub avg_resolution_hours: f64,

    /// SLA 达成率 (百分比, 仅统计"已关闭且有截止时间"的工单)
    pub sla_compliance_pct: f64,

    /// 快照生成时刻
    pub generated_at: DateTime<Utc>,
}

// ==========================================
// TeamWorkload - 团队负载
// ==========================================

/// 单个团队的负载快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamWorkload {
    pub team_id: String,
    pub team_name: String,

    /// 未关闭工单数
    pub active_requests: u32,

    /// 未关闭且未分派处理人的工单数
    pub pending_requests: u32,
}

// ==========================================
// WorkloadChartData - 负载图表数据
// ==========================================
// 图表渲染由外部服务完成,这里只产出序列数据

/// 一条图表序列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// 本地化序列名称
    pub name: String,
    pub data: Vec<u32>,
}

/// 团队负载图表数据 (横轴为团队名)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadChartData {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}
