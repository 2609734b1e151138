// ==========================================
// 技术服务工单控制台 - 核心库
// ==========================================
// 技术栈: Rust + tokio
// 系统定位: 维修工单 SLA 监控与驾驶舱核心 (外壳无关)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 仓储层 - 数据访问接缝
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// 监控层 - SLA 轮询
pub mod monitor;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 外壳集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    Impact, NotificationKind, OperationPhase, PriorityLevel, RequestStage, RequestType,
    SlaState, Urgency,
};

// 领域实体与值对象
pub use domain::{
    ConfirmationPrompt, DashboardStats, DeadlineStatus, NavigationAction, Notification,
    QuickCreateDraft, ServiceRequest, ServiceTeam, TeamWorkload, WorkloadChartData,
};

// 引擎
pub use engine::{DashboardStatsEngine, DiscardFlow, SaveFlow, SlaEngine, WorkloadEngine};

// 监控
pub use monitor::{MonitorHandle, SlaMonitor};

// API
pub use api::{DashboardApi, RequestApi};

// 配置
pub use config::{ConsoleConfig, SlaPolicyConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "技术服务工单控制台";
