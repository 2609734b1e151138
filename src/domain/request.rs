// ==========================================
// 技术服务工单控制台 - 工单实体
// ==========================================
// 职责: 定义服务工单、服务团队实体
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

use crate::domain::types::{Impact, PriorityLevel, RequestStage, RequestType, Urgency};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// ServiceRequest - 服务工单
// ==========================================

/// 服务工单
///
/// priority 由 impact × urgency 矩阵派生,创建后随两者变更重算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    /// 工单ID (UUID)
    pub request_id: String,

    /// 工单编号 (REQ-xxxxx, 由仓储序列生成)
    pub request_number: String,

    /// 标题
    pub title: String,

    /// 问题描述
    pub description: String,

    /// 工单类型
    pub request_type: RequestType,

    /// 影响面
    pub impact: Impact,

    /// 紧急度
    pub urgency: Urgency,

    /// 优先级 (派生字段)
    pub priority: PriorityLevel,

    /// 工单阶段
    pub stage: RequestStage,

    /// 所属团队
    pub team_id: Option<String>,

    /// 处理人
    pub assignee: Option<String>,

    /// 创建时刻
    pub created_at: DateTime<Utc>,

    /// SLA 解决截止时刻 (由 SLA 策略派生; 无策略时为 None)
    pub sla_deadline: Option<DateTime<Utc>>,

    /// 关闭时刻 (终态工单)
    pub closed_at: Option<DateTime<Utc>>,
}

impl ServiceRequest {
    /// 创建新工单
    ///
    /// 优先级按矩阵派生; 阶段为 New; 截止时间由调用方按 SLA 策略补充
    pub fn new(
        request_number: String,
        title: impl Into<String>,
        description: impl Into<String>,
        request_type: RequestType,
        impact: Impact,
        urgency: Urgency,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            request_number,
            title: title.into(),
            description: description.into(),
            request_type,
            impact,
            urgency,
            priority: PriorityLevel::from_matrix(impact, urgency),
            stage: RequestStage::New,
            team_id: None,
            assignee: None,
            created_at,
            sla_deadline: None,
            closed_at: None,
        }
    }

    /// 是否为未关闭工单
    pub fn is_open(&self) -> bool {
        !self.stage.is_done()
    }

    /// 实际解决耗时 (小时)
    ///
    /// 仅对已关闭工单有意义; 未关闭返回 None
    pub fn resolution_hours(&self) -> Option<f64> {
        let closed = self.closed_at?;
        let elapsed = closed.signed_duration_since(self.created_at);
        Some(elapsed.num_milliseconds() as f64 / 3_600_000.0)
    }

    /// 是否在截止时间内解决
    ///
    /// 仅对"已关闭且有截止时间"的工单有意义; 其余返回 None
    pub fn resolved_within_sla(&self) -> Option<bool> {
        let closed = self.closed_at?;
        let deadline = self.sla_deadline?;
        Some(closed <= deadline)
    }
}

// ==========================================
// QuickCreateDraft - 快速建单草稿
// ==========================================

/// 快速建单草稿
///
/// 默认值: 故障工单 + 中等影响面/紧急度 (矩阵结果 P2~P3 档)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickCreateDraft {
    pub title: String,
    pub description: String,
    pub request_type: RequestType,
    pub impact: Impact,
    pub urgency: Urgency,
}

impl Default for QuickCreateDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            request_type: RequestType::Incident,
            impact: Impact::Low,
            urgency: Urgency::Medium,
        }
    }
}

// ==========================================
// ServiceTeam - 服务团队
// ==========================================

/// 服务团队
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTeam {
    pub team_id: String,
    pub name: String,
}

impl ServiceTeam {
    pub fn new(team_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            name: name.into(),
        }
    }
}
