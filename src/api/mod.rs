// ==========================================
// 技术服务工单控制台 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供外壳 (桌面端/Web 端) 调用
// ==========================================

pub mod error;
pub mod dashboard_api;
pub mod request_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use dashboard_api::DashboardApi;
pub use request_api::{QuickCreateOutcome, RequestApi};
