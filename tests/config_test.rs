// ==========================================
// 控制台配置集成测试
// ==========================================
// 测试目标: 默认值、JSON 快照往返、配置对引擎/监控的生效
// ==========================================

use chrono::{DateTime, TimeZone, Utc};
use technical_service_console::config::{ConsoleConfig, SlaPolicyConfig};
use technical_service_console::domain::types::{PriorityLevel, SlaState};
use technical_service_console::engine::SlaEngine;

// ==========================================
// 测试辅助函数
// ==========================================

fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, h, m, 0).unwrap()
}

// ==========================================
// 测试用例
// ==========================================

#[test]
fn test_default_values() {
    let config = ConsoleConfig::default();

    assert_eq!(config.locale, "zh-CN");
    // 临近超时阈值 2 小时, 轮询周期 60 秒
    assert_eq!(config.sla.at_risk_threshold_minutes, 120);
    assert_eq!(config.sla.tick_interval_secs, 60);
    assert_eq!(
        config.sla.tick_interval(),
        std::time::Duration::from_secs(60)
    );

    // 标准策略四行齐全
    assert_eq!(config.sla.policy_lines.len(), 4);
    let p1 = config.sla.line_for(PriorityLevel::P1).unwrap();
    assert_eq!(p1.response_hours, 0.5);
    assert_eq!(p1.resolution_hours, 4.0);
    let p4 = config.sla.line_for(PriorityLevel::P4).unwrap();
    assert_eq!(p4.resolution_hours, 72.0);
}

#[test]
fn test_snapshot_roundtrip() {
    let mut config = ConsoleConfig::default();
    config.locale = "tr".to_string();
    config.sla.at_risk_threshold_minutes = 45;
    config.sla.tick_interval_secs = 30;

    let snapshot = config.snapshot().unwrap();
    let restored = ConsoleConfig::from_json(&snapshot).unwrap();

    assert_eq!(restored, config);
}

#[test]
fn test_malformed_snapshot_is_error() {
    assert!(ConsoleConfig::from_json("{not json").is_err());
}

#[test]
fn test_threshold_config_drives_classification() {
    let mut sla = SlaPolicyConfig::default();
    sla.at_risk_threshold_minutes = 240; // 阈值放宽到 4 小时
    let engine = SlaEngine::from_config(&sla);

    // 3 小时剩余: 默认配置是 on_track, 4 小时阈值下是 at_risk
    let status = engine.evaluate(Some(at(13, 0)), at(10, 0));
    assert_eq!(status.state, SlaState::AtRisk);

    // 恰好 4 小时 → 闭区间边界,归 on_track
    let status = engine.evaluate(Some(at(14, 0)), at(10, 0));
    assert_eq!(status.state, SlaState::OnTrack);
}

#[test]
fn test_policy_lines_drive_deadlines() {
    let engine = SlaEngine::from_config(&SlaPolicyConfig::default());
    let created = at(8, 0);

    assert_eq!(
        engine.resolution_deadline(PriorityLevel::P2, created),
        Some(at(16, 0)) // 8 小时
    );
    assert_eq!(
        engine.response_deadline(PriorityLevel::P2, created),
        Some(at(10, 0)) // 2 小时
    );

    // 删除策略行后无截止时刻可派生
    let mut sparse = SlaPolicyConfig::default();
    sparse.policy_lines.retain(|l| l.priority == PriorityLevel::P1);
    let engine = SlaEngine::from_config(&sparse);
    assert_eq!(engine.resolution_deadline(PriorityLevel::P3, created), None);
}
