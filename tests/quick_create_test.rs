// ==========================================
// RequestApi 快速建单集成测试
// ==========================================
// 测试目标: 校验、编号序列、优先级/截止时刻派生、落库与导航
// ==========================================

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::{Arc, Mutex};
use technical_service_console::api::{ApiError, RequestApi};
use technical_service_console::domain::action::NavigationTarget;
use technical_service_console::domain::request::QuickCreateDraft;
use technical_service_console::domain::types::{
    Impact, NotificationKind, PriorityLevel, RequestStage, RequestType, Urgency,
};
use technical_service_console::engine::SlaEngine;
use technical_service_console::i18n;
use technical_service_console::repository::{InMemoryRequestStore, RequestRepository};

static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

// ==========================================
// 测试辅助函数
// ==========================================

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
}

fn setup() -> (Arc<InMemoryRequestStore>, RequestApi) {
    let store = Arc::new(InMemoryRequestStore::new());
    let api = RequestApi::new(
        Arc::clone(&store) as Arc<dyn RequestRepository>,
        Arc::new(SlaEngine::new()),
    );
    (store, api)
}

// ==========================================
// 测试用例 1: 空描述被拒绝
// ==========================================

#[tokio::test]
async fn test_blank_description_rejected() {
    let _guard = LOCALE_TEST_LOCK.lock().unwrap();
    i18n::set_locale("en");

    let (store, api) = setup();
    let draft = QuickCreateDraft {
        description: "   ".to_string(),
        ..QuickCreateDraft::default()
    };

    let err = api.quick_create(draft, now()).await.unwrap_err();
    match &err {
        ApiError::InvalidInput(message) => {
            assert_eq!(message, "Please enter a description");
        }
        other => panic!("期望 InvalidInput, 实际 {:?}", other),
    }

    // 错误映射为 warning 提示
    let notification = err.to_notification();
    assert_eq!(notification.kind, NotificationKind::Warning);

    // 未落库
    assert!(store.list_requests().await.unwrap().is_empty());

    i18n::set_locale("zh-CN");
}

// ==========================================
// 测试用例 2: 建单成功
// ==========================================

#[tokio::test]
async fn test_quick_create_defaults_and_persistence() {
    let (store, api) = setup();

    let draft = QuickCreateDraft {
        description: "打印机卡纸".to_string(),
        ..QuickCreateDraft::default()
    };
    let outcome = api.quick_create(draft, now()).await.unwrap();

    // 默认: 故障工单, low 影响面 × medium 紧急度 → P3
    assert_eq!(outcome.request.request_type, RequestType::Incident);
    assert_eq!(outcome.request.priority, PriorityLevel::P3);
    assert_eq!(outcome.request.stage, RequestStage::New);
    assert_eq!(outcome.request.request_number, "REQ-00001");
    // 标题缺省沿用描述
    assert_eq!(outcome.request.title, "打印机卡纸");
    // P3 标准策略解决时限 24 小时
    assert_eq!(
        outcome.request.sla_deadline,
        Some(now() + Duration::hours(24))
    );

    // 成功提示 + 跳转到新工单
    assert_eq!(outcome.notification.kind, NotificationKind::Success);
    match &outcome.open_action.target {
        NavigationTarget::RequestForm { request_id } => {
            assert_eq!(request_id, &outcome.request.request_id);
        }
        other => panic!("期望表单导航, 实际 {:?}", other),
    }

    // 已落库
    let stored = store.list_requests().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], outcome.request);
}

// ==========================================
// 测试用例 3: 编号序列与优先级矩阵
// ==========================================

#[tokio::test]
async fn test_sequence_and_priority_matrix() {
    let (_store, api) = setup();

    let first = api
        .quick_create(
            QuickCreateDraft {
                description: "A".to_string(),
                ..QuickCreateDraft::default()
            },
            now(),
        )
        .await
        .unwrap();

    let second = api
        .quick_create(
            QuickCreateDraft {
                title: "机房断电".to_string(),
                description: "机房 UPS 故障导致断电".to_string(),
                impact: Impact::Critical,
                urgency: Urgency::High,
                ..QuickCreateDraft::default()
            },
            now(),
        )
        .await
        .unwrap();

    assert_eq!(first.request.request_number, "REQ-00001");
    assert_eq!(second.request.request_number, "REQ-00002");

    // critical 影响面 → P1, 标准策略解决时限 4 小时
    assert_eq!(second.request.priority, PriorityLevel::P1);
    assert_eq!(second.request.title, "机房断电");
    assert_eq!(
        second.request.sla_deadline,
        Some(now() + Duration::hours(4))
    );
}
