// ==========================================
// 技术服务工单控制台 - 引擎层
// ==========================================
// 职责: 实现业务规则引擎
// 红线: 时刻由调用方注入,引擎内部不读墙钟
// ==========================================

pub mod form_flow;
pub mod sla;
pub mod stats;
pub mod workload;

// 重导出核心引擎
pub use form_flow::{DiscardFlow, FlowError, SaveFlow};
pub use sla::SlaEngine;
pub use stats::DashboardStatsEngine;
pub use workload::WorkloadEngine;
