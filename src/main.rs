// ==========================================
// 技术服务工单控制台 - 演示主入口
// ==========================================
// 职责: 预置演示数据,打印驾驶舱统计,跑一轮 SLA 监控
// 真实部署中本核心由桌面/Web 外壳托管,此入口仅作联调演示
// ==========================================

use std::sync::Arc;

use chrono::{Duration, Utc};
use technical_service_console::app::AppState;
use technical_service_console::config::ConsoleConfig;
use technical_service_console::domain::request::{QuickCreateDraft, ServiceRequest, ServiceTeam};
use technical_service_console::domain::types::{Impact, RequestStage, RequestType, Urgency};
use technical_service_console::repository::{InMemoryRequestStore, RequestRepository};
use technical_service_console::{i18n, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", technical_service_console::APP_NAME);
    tracing::info!("系统版本: {}", technical_service_console::VERSION);
    tracing::info!("==================================================");

    let config = ConsoleConfig::default();
    i18n::set_locale(&config.locale);
    tracing::info!("界面语言: {}", i18n::current_locale());

    // 预置演示数据
    let repo = Arc::new(seed_store());
    let state = AppState::with_repository(config, Arc::clone(&repo) as Arc<dyn RequestRepository>);

    // 快速建单演示
    let now = Utc::now();
    let outcome = state
        .request_api
        .quick_create(
            QuickCreateDraft {
                description: "三号楼空调不制冷".to_string(),
                impact: Impact::Medium,
                urgency: Urgency::High,
                ..QuickCreateDraft::default()
            },
            now,
        )
        .await?;
    tracing::info!(
        "{} [{}] → {}",
        outcome.notification.message,
        outcome.request.request_number,
        outcome.open_action.name
    );

    // 驾驶舱统计
    let (stats, notification) = state.dashboard_api.refresh(now).await?;
    tracing::info!("{}", notification.message);
    tracing::info!(
        "开放工单: {} | 危急: {} | SLA 超时: {} | 平均解决: {:.1}h | 达成率: {:.1}%",
        stats.open_requests,
        stats.critical_requests,
        stats.sla_breached,
        stats.avg_resolution_hours,
        stats.sla_compliance_pct
    );

    let chart = state.dashboard_api.team_workload().await?;
    tracing::info!("团队负载: {:?} / {:?}", chart.labels, chart.series);

    // SLA 监控演示: 对最紧迫的开放工单跑一轮倒计时
    let deadline = repo
        .list_requests()
        .await?
        .into_iter()
        .filter(|r| r.is_open())
        .filter_map(|r| r.sla_deadline)
        .min();

    let handle = state.sla_monitor().spawn(
        move || deadline,
        |status| {
            tracing::info!("SLA 监控: [{}] {}", status.state, status.display);
        },
    );

    tokio::time::sleep(std::time::Duration::from_secs(2)).await;
    handle.cancel();
    tracing::info!("监控已取消,演示结束");

    Ok(())
}

/// 预置演示数据
fn seed_store() -> InMemoryRequestStore {
    let now = Utc::now();

    let mut breached = ServiceRequest::new(
        "REQ-90001".to_string(),
        "配电间跳闸",
        "二号配电间总闸跳闸,整层断电",
        RequestType::Incident,
        Impact::Critical,
        Urgency::Critical,
        now - Duration::hours(6),
    );
    breached.stage = RequestStage::InProgress;
    breached.team_id = Some("T-ELEC".to_string());
    breached.assignee = Some("张工".to_string());
    breached.sla_deadline = Some(now - Duration::hours(2));

    let mut at_risk = ServiceRequest::new(
        "REQ-90002".to_string(),
        "会议室投影无信号",
        "五层大会议室投影仪无输入信号",
        RequestType::Incident,
        Impact::Medium,
        Urgency::Medium,
        now - Duration::hours(7),
    );
    at_risk.stage = RequestStage::InProgress;
    at_risk.team_id = Some("T-IT".to_string());
    at_risk.sla_deadline = Some(now + Duration::minutes(90));

    let mut resolved = ServiceRequest::new(
        "REQ-90003".to_string(),
        "走廊灯管更换",
        "四层走廊两支灯管闪烁",
        RequestType::ServiceRequest,
        Impact::Low,
        Urgency::Low,
        now - Duration::hours(30),
    );
    resolved.stage = RequestStage::Resolved;
    resolved.team_id = Some("T-ELEC".to_string());
    resolved.assignee = Some("李工".to_string());
    resolved.sla_deadline = Some(now - Duration::hours(2));
    resolved.closed_at = Some(now - Duration::hours(4));

    InMemoryRequestStore::with_seed(
        vec![breached, at_risk, resolved],
        vec![
            ServiceTeam::new("T-ELEC", "电气组"),
            ServiceTeam::new("T-IT", "IT 支持组"),
        ],
    )
}
