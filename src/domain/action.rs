// ==========================================
// 技术服务工单控制台 - 导航动作值对象
// ==========================================
// 职责: 以纯数据形式描述外部动作/导航服务的输入
// 过滤条件采用 [字段, 操作符, 值] 三元组数组
// ==========================================

use crate::i18n::t;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// ==========================================
// NavigationTarget - 导航目标
// ==========================================

/// 导航目标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavigationTarget {
    /// 打开工单列表视图 (带过滤条件)
    RequestList { filter: Value },

    /// 打开单个工单表单视图
    RequestForm { request_id: String },
}

// ==========================================
// NavigationAction - 导航动作
// ==========================================

/// 导航动作值
///
/// 由外部动作服务负责执行; 本核心只产出目标描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationAction {
    /// 本地化动作标题
    pub name: String,

    /// 导航目标
    pub target: NavigationTarget,
}

impl NavigationAction {
    /// 查看危急 (P1) 工单列表
    pub fn critical_requests() -> Self {
        Self {
            name: t("action.critical_requests"),
            target: NavigationTarget::RequestList {
                filter: json!([["priority", "=", "p1"]]),
            },
        }
    }

    /// 查看 SLA 超时工单列表
    pub fn breached_requests() -> Self {
        Self {
            name: t("action.breached_requests"),
            target: NavigationTarget::RequestList {
                filter: json!([["sla_state", "=", "breached"]]),
            },
        }
    }

    /// 打开指定工单表单
    pub fn open_request(request_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: title.into(),
            target: NavigationTarget::RequestForm {
                request_id: request_id.into(),
            },
        }
    }
}
