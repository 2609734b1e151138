// ==========================================
// 技术服务工单控制台 - 工单 API
// ==========================================
// 职责: 快速建单 (校验 → 编号 → 截止时刻派生 → 落库)
// ==========================================

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::action::NavigationAction;
use crate::domain::notification::Notification;
use crate::domain::request::{QuickCreateDraft, ServiceRequest};
use crate::engine::sla::SlaEngine;
use crate::i18n::t;
use crate::repository::RequestRepository;

// ==========================================
// QuickCreateOutcome - 快速建单结果
// ==========================================

/// 快速建单结果
///
/// 外壳拿到后: 弹提示 + 跳转到新建工单表单
#[derive(Debug, Clone)]
pub struct QuickCreateOutcome {
    pub request: ServiceRequest,
    pub notification: Notification,
    pub open_action: NavigationAction,
}

// ==========================================
// RequestApi - 工单 API
// ==========================================

/// 工单 API
pub struct RequestApi {
    repo: Arc<dyn RequestRepository>,
    sla_engine: Arc<SlaEngine>,
}

impl RequestApi {
    /// 创建新的 RequestApi 实例
    pub fn new(repo: Arc<dyn RequestRepository>, sla_engine: Arc<SlaEngine>) -> Self {
        Self { repo, sla_engine }
    }

    // ==========================================
    // 快速建单
    // ==========================================

    /// 快速建单
    ///
    /// 校验: 描述为空 → InvalidInput (外壳弹 warning 提示)。
    /// 标题为空时沿用描述作为标题 (快速入口只填一个框)。
    /// 截止时刻按矩阵优先级 + SLA 策略行派生。
    pub async fn quick_create(
        &self,
        draft: QuickCreateDraft,
        now: DateTime<Utc>,
    ) -> ApiResult<QuickCreateOutcome> {
        if draft.description.trim().is_empty() {
            return Err(ApiError::InvalidInput(t("notification.missing_description")));
        }

        let request_number = self.repo.next_request_number().await?;

        let title = if draft.title.trim().is_empty() {
            draft.description.clone()
        } else {
            draft.title.clone()
        };

        let mut request = ServiceRequest::new(
            request_number,
            title,
            draft.description,
            draft.request_type,
            draft.impact,
            draft.urgency,
            now,
        );
        request.sla_deadline = self.sla_engine.resolution_deadline(request.priority, now);

        let stored = match self.repo.insert_request(request).await {
            Ok(stored) => stored,
            Err(e) => {
                warn!("工单创建失败: {}", e);
                return Err(e.into());
            }
        };

        info!(
            number = %stored.request_number,
            priority = %stored.priority,
            "工单创建成功"
        );

        let open_action =
            NavigationAction::open_request(stored.request_id.clone(), stored.title.clone());

        Ok(QuickCreateOutcome {
            request: stored,
            notification: Notification::request_created(),
            open_action,
        })
    }
}
