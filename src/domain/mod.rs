// ==========================================
// 技术服务工单控制台 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、值对象
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod action;
pub mod dashboard;
pub mod notification;
pub mod request;
pub mod sla;
pub mod types;

// 重导出核心类型
pub use action::{NavigationAction, NavigationTarget};
pub use dashboard::{ChartSeries, DashboardStats, TeamWorkload, WorkloadChartData};
pub use notification::{ConfirmationPrompt, Notification};
pub use request::{QuickCreateDraft, ServiceRequest, ServiceTeam};
pub use sla::DeadlineStatus;
pub use types::{
    Impact, NotificationKind, OperationPhase, PriorityLevel, RequestStage, RequestType,
    SlaState, Urgency,
};
