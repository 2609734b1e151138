// ==========================================
// 技术服务工单控制台 - 领域类型定义
// ==========================================
// 序列化格式: snake_case (与工单记录字段一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// SLA 状态 (SLA State)
// ==========================================
// 顺序即紧迫程度: Unknown < OnTrack < AtRisk < Breached
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaState {
    Unknown,  // 无截止时间或格式非法,不可操作
    OnTrack,  // 正常
    AtRisk,   // 临近超时
    Breached, // 已超时
}

impl fmt::Display for SlaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlaState::Unknown => write!(f, "unknown"),
            SlaState::OnTrack => write!(f, "on_track"),
            SlaState::AtRisk => write!(f, "at_risk"),
            SlaState::Breached => write!(f, "breached"),
        }
    }
}

impl SlaState {
    /// 从字符串解析 SLA 状态
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "on_track" => SlaState::OnTrack,
            "at_risk" => SlaState::AtRisk,
            "breached" => SlaState::Breached,
            _ => SlaState::Unknown,
        }
    }

    /// 转换为记录字段存储的字符串
    pub fn as_record_str(&self) -> &'static str {
        match self {
            SlaState::Unknown => "unknown",
            SlaState::OnTrack => "on_track",
            SlaState::AtRisk => "at_risk",
            SlaState::Breached => "breached",
        }
    }

    /// 是否可操作 (Unknown 状态不展示倒计时、不触发提醒)
    pub fn is_actionable(&self) -> bool {
        !matches!(self, SlaState::Unknown)
    }
}

// ==========================================
// 优先级 (Priority Level)
// ==========================================
// 由 影响面 × 紧急度 矩阵计算得出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    P1, // 危急
    P2, // 高
    P3, // 中
    P4, // 低
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityLevel::P1 => write!(f, "p1"),
            PriorityLevel::P2 => write!(f, "p2"),
            PriorityLevel::P3 => write!(f, "p3"),
            PriorityLevel::P4 => write!(f, "p4"),
        }
    }
}

impl PriorityLevel {
    /// 影响面 × 紧急度 矩阵
    ///
    /// 规则:
    /// - critical 影响面 → 一律 P1
    /// - high 影响面 → 仅 low 紧急度降为 P2,其余 P1
    /// - medium 影响面 → low=P3, medium=P2, high/critical=P1
    /// - low 影响面 → low=P4, medium=P3, high/critical=P2
    pub fn from_matrix(impact: Impact, urgency: Urgency) -> Self {
        match (impact, urgency) {
            (Impact::Low, Urgency::Low) => PriorityLevel::P4,
            (Impact::Low, Urgency::Medium) => PriorityLevel::P3,
            (Impact::Low, _) => PriorityLevel::P2,
            (Impact::Medium, Urgency::Low) => PriorityLevel::P3,
            (Impact::Medium, Urgency::Medium) => PriorityLevel::P2,
            (Impact::Medium, _) => PriorityLevel::P1,
            (Impact::High, Urgency::Low) => PriorityLevel::P2,
            (Impact::High, _) => PriorityLevel::P1,
            (Impact::Critical, _) => PriorityLevel::P1,
        }
    }

    /// 从字符串解析优先级,非法值回落到 P3
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "p1" => PriorityLevel::P1,
            "p2" => PriorityLevel::P2,
            "p4" => PriorityLevel::P4,
            _ => PriorityLevel::P3, // 默认值
        }
    }
}

// ==========================================
// 影响面 (Impact)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Low,      // 单个用户
    Medium,   // 部门级
    High,     // 楼层/整栋
    Critical, // 全系统
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::Low => write!(f, "low"),
            Impact::Medium => write!(f, "medium"),
            Impact::High => write!(f, "high"),
            Impact::Critical => write!(f, "critical"),
        }
    }
}

// ==========================================
// 紧急度 (Urgency)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,      // 可等待
    Medium,   // 正常
    High,     // 紧急
    Critical, // 立即处理
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Low => write!(f, "low"),
            Urgency::Medium => write!(f, "medium"),
            Urgency::High => write!(f, "high"),
            Urgency::Critical => write!(f, "critical"),
        }
    }
}

// ==========================================
// 工单类型 (Request Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    Incident,       // 故障
    ServiceRequest, // 服务请求
    Preventive,     // 预防性维护
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestType::Incident => write!(f, "incident"),
            RequestType::ServiceRequest => write!(f, "service_request"),
            RequestType::Preventive => write!(f, "preventive"),
        }
    }
}

// ==========================================
// 工单阶段 (Request Stage)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStage {
    New,        // 新建
    InProgress, // 处理中
    OnHold,     // 挂起
    Resolved,   // 已解决
    Cancelled,  // 已取消
}

impl fmt::Display for RequestStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStage::New => write!(f, "new"),
            RequestStage::InProgress => write!(f, "in_progress"),
            RequestStage::OnHold => write!(f, "on_hold"),
            RequestStage::Resolved => write!(f, "resolved"),
            RequestStage::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl RequestStage {
    /// 终态判定 (终态工单不参与 SLA 统计与超时提醒)
    pub fn is_done(&self) -> bool {
        matches!(self, RequestStage::Resolved | RequestStage::Cancelled)
    }
}

// ==========================================
// 操作阶段 (Operation Phase)
// ==========================================
// 保存/放弃按钮的显式状态机,取代全局可变标志位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationPhase {
    Idle,      // 空闲
    InFlight,  // 进行中
    Succeeded, // 已成功
    Failed,    // 已失败
}

impl fmt::Display for OperationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationPhase::Idle => write!(f, "idle"),
            OperationPhase::InFlight => write!(f, "in_flight"),
            OperationPhase::Succeeded => write!(f, "succeeded"),
            OperationPhase::Failed => write!(f, "failed"),
        }
    }
}

// ==========================================
// 通知级别 (Notification Kind)
// ==========================================
// 与外部通知服务的级别一一对应
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Danger,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Info => write!(f, "info"),
            NotificationKind::Warning => write!(f, "warning"),
            NotificationKind::Danger => write!(f, "danger"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_matrix() {
        // critical 影响面一律 P1
        assert_eq!(
            PriorityLevel::from_matrix(Impact::Critical, Urgency::Low),
            PriorityLevel::P1
        );
        // 单用户 + 可等待 → P4
        assert_eq!(
            PriorityLevel::from_matrix(Impact::Low, Urgency::Low),
            PriorityLevel::P4
        );
        assert_eq!(
            PriorityLevel::from_matrix(Impact::Medium, Urgency::High),
            PriorityLevel::P1
        );
        assert_eq!(
            PriorityLevel::from_matrix(Impact::High, Urgency::Low),
            PriorityLevel::P2
        );
        assert_eq!(
            PriorityLevel::from_matrix(Impact::Low, Urgency::Critical),
            PriorityLevel::P2
        );
    }

    #[test]
    fn test_sla_state_order() {
        // 升级判定依赖状态顺序
        assert!(SlaState::Breached > SlaState::AtRisk);
        assert!(SlaState::AtRisk > SlaState::OnTrack);
        assert!(SlaState::OnTrack > SlaState::Unknown);
    }

    #[test]
    fn test_sla_state_from_str() {
        assert_eq!(SlaState::from_str("breached"), SlaState::Breached);
        assert_eq!(SlaState::from_str("AT_RISK"), SlaState::AtRisk);
        assert_eq!(SlaState::from_str("garbage"), SlaState::Unknown);
    }

    #[test]
    fn test_stage_is_done() {
        assert!(RequestStage::Resolved.is_done());
        assert!(RequestStage::Cancelled.is_done());
        assert!(!RequestStage::OnHold.is_done());
        assert!(!RequestStage::New.is_done());
    }
}
