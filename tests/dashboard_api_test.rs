// ==========================================
// DashboardApi 集成测试
// ==========================================
// 测试目标: 统计口径、团队负载聚合、超时列表、导航动作
// ==========================================

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::{Arc, Mutex};
use technical_service_console::api::DashboardApi;
use technical_service_console::domain::action::NavigationTarget;
use technical_service_console::domain::request::{ServiceRequest, ServiceTeam};
use technical_service_console::domain::types::{
    Impact, NotificationKind, RequestStage, RequestType, Urgency,
};
use technical_service_console::engine::SlaEngine;
use technical_service_console::i18n;
use technical_service_console::repository::InMemoryRequestStore;

static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

// ==========================================
// 测试辅助函数
// ==========================================

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
}

/// 创建测试工单
fn request(
    number: &str,
    impact: Impact,
    urgency: Urgency,
    stage: RequestStage,
    team_id: Option<&str>,
    assignee: Option<&str>,
    deadline_offset_minutes: Option<i64>,
) -> ServiceRequest {
    let mut r = ServiceRequest::new(
        number.to_string(),
        number,
        "测试工单",
        RequestType::Incident,
        impact,
        urgency,
        now() - Duration::hours(10),
    );
    r.stage = stage;
    r.team_id = team_id.map(str::to_string);
    r.assignee = assignee.map(str::to_string);
    r.sla_deadline = deadline_offset_minutes.map(|m| now() + Duration::minutes(m));
    r
}

fn api(store: InMemoryRequestStore) -> DashboardApi {
    DashboardApi::new(Arc::new(store), Arc::new(SlaEngine::new()))
}

// ==========================================
// 测试用例 1: 统计口径
// ==========================================

#[tokio::test]
async fn test_stats_counts_and_rates() {
    // 危急(P1)超时、在途、已按期解决、已超期解决 各一单
    let mut on_time = request(
        "REQ-00003",
        Impact::Low,
        Urgency::Low,
        RequestStage::Resolved,
        None,
        Some("tech-a"),
        Some(-60),
    );
    on_time.closed_at = Some(now() - Duration::hours(2)); // 截止前 1 小时关闭

    let mut late = request(
        "REQ-00004",
        Impact::Low,
        Urgency::Medium,
        RequestStage::Resolved,
        None,
        Some("tech-b"),
        Some(-300),
    );
    late.closed_at = Some(now() - Duration::hours(1)); // 超出截止 4 小时关闭

    let store = InMemoryRequestStore::with_seed(
        vec![
            // P1 且已超时 30 分钟
            request(
                "REQ-00001",
                Impact::Critical,
                Urgency::Critical,
                RequestStage::InProgress,
                Some("T1"),
                Some("tech-a"),
                Some(-30),
            ),
            // P3 在途,剩余 5 小时
            request(
                "REQ-00002",
                Impact::Medium,
                Urgency::Low,
                RequestStage::New,
                Some("T1"),
                None,
                Some(300),
            ),
            on_time,
            late,
        ],
        vec![],
    );

    let stats = api(store).load_stats(now()).await.unwrap();

    assert_eq!(stats.open_requests, 2);
    assert_eq!(stats.critical_requests, 1);
    assert_eq!(stats.sla_breached, 1);
    // 已关闭两单: 8h 与 9h → 平均 8.5h
    assert!((stats.avg_resolution_hours - 8.5).abs() < 1e-9);
    // 两单中一单按期 → 50%
    assert!((stats.sla_compliance_pct - 50.0).abs() < 1e-9);
    assert_eq!(stats.generated_at, now());
}

#[tokio::test]
async fn test_stats_empty_store_reports_full_compliance() {
    let stats = api(InMemoryRequestStore::new()).load_stats(now()).await.unwrap();

    assert_eq!(stats.open_requests, 0);
    assert_eq!(stats.sla_breached, 0);
    assert_eq!(stats.avg_resolution_hours, 0.0);
    // 无可评估工单时不报告违约
    assert_eq!(stats.sla_compliance_pct, 100.0);
}

// ==========================================
// 测试用例 2: 刷新附带成功提示
// ==========================================

#[tokio::test]
async fn test_refresh_returns_notification() {
    let _guard = LOCALE_TEST_LOCK.lock().unwrap();
    i18n::set_locale("en");

    let (_stats, notification) = api(InMemoryRequestStore::new()).refresh(now()).await.unwrap();

    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.message, "Dashboard refreshed");
    assert!(!notification.sticky);

    i18n::set_locale("zh-CN");
}

// ==========================================
// 测试用例 3: 团队负载聚合
// ==========================================

#[tokio::test]
async fn test_team_workload_chart() {
    let _guard = LOCALE_TEST_LOCK.lock().unwrap();
    i18n::set_locale("en");

    let store = InMemoryRequestStore::with_seed(
        vec![
            request("REQ-00001", Impact::Low, Urgency::Medium, RequestStage::New, Some("T1"), None, None),
            request("REQ-00002", Impact::Low, Urgency::Medium, RequestStage::InProgress, Some("T1"), Some("tech-a"), None),
            request("REQ-00003", Impact::Low, Urgency::Medium, RequestStage::OnHold, Some("T2"), None, None),
            // 终态工单不计入负载
            request("REQ-00004", Impact::Low, Urgency::Medium, RequestStage::Resolved, Some("T2"), Some("tech-b"), None),
            // 未分派团队的工单不计入任何团队
            request("REQ-00005", Impact::Low, Urgency::Medium, RequestStage::New, None, None, None),
        ],
        vec![
            ServiceTeam::new("T1", "Electrical"),
            ServiceTeam::new("T2", "HVAC"),
        ],
    );

    let chart = api(store).team_workload().await.unwrap();

    assert_eq!(chart.labels, vec!["Electrical", "HVAC"]);
    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.series[0].name, "Active Requests");
    assert_eq!(chart.series[0].data, vec![2, 1]);
    assert_eq!(chart.series[1].name, "Pending Requests");
    assert_eq!(chart.series[1].data, vec![1, 1]);

    i18n::set_locale("zh-CN");
}

// ==========================================
// 测试用例 4: 超时列表
// ==========================================

#[tokio::test]
async fn test_list_breached_only_open_requests() {
    let mut closed_breached = request(
        "REQ-00003",
        Impact::Low,
        Urgency::Low,
        RequestStage::Resolved,
        None,
        None,
        Some(-600),
    );
    closed_breached.closed_at = Some(now() - Duration::hours(1));

    let store = InMemoryRequestStore::with_seed(
        vec![
            request("REQ-00001", Impact::Low, Urgency::Medium, RequestStage::New, None, None, Some(-10)),
            request("REQ-00002", Impact::Low, Urgency::Medium, RequestStage::New, None, None, Some(90)),
            closed_breached,
            // 无截止时间 → Unknown, 不进超时列表
            request("REQ-00004", Impact::Low, Urgency::Medium, RequestStage::New, None, None, None),
        ],
        vec![],
    );

    let breached = api(store).list_breached(now()).await.unwrap();

    assert_eq!(breached.len(), 1);
    assert_eq!(breached[0].request_number, "REQ-00001");
}

// ==========================================
// 测试用例 5: 导航动作
// ==========================================

#[tokio::test]
async fn test_navigation_actions_carry_filters() {
    let dashboard = api(InMemoryRequestStore::new());

    let critical = dashboard.critical_requests_action();
    match critical.target {
        NavigationTarget::RequestList { filter } => {
            assert_eq!(filter, serde_json::json!([["priority", "=", "p1"]]));
        }
        other => panic!("期望列表导航, 实际 {:?}", other),
    }

    let breached = dashboard.breached_requests_action();
    match breached.target {
        NavigationTarget::RequestList { filter } => {
            assert_eq!(filter, serde_json::json!([["sla_state", "=", "breached"]]));
        }
        other => panic!("期望列表导航, 实际 {:?}", other),
    }
}
