//! 预订表单控制器
//!
//! 持有表单草稿与错误集合，驱动创建/编辑两种模式的状态机：
//! 字段变更 → 规范化/校验，提交 → 远端持久化 → 跳转。
//! 异步调用全程携带取消令牌，teardown 后不再回写状态。

use tokio_util::sync::CancellationToken;

use crate::api::{Navigator, ReservationApi};
use crate::config::ClientConfig;
use crate::form::errors::{ErrorSource, FieldErrors};
use crate::form::phone::normalize_phone;
use crate::form::validate::{validate_reservation_date, validate_reservation_time};
use crate::models::{ReservationDraft, ReservationId};
use crate::utils::time::now_millis;

/// Form machine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Create mode, nothing touched yet
    Idle,
    /// Edit mode, hydration in flight
    Loading,
    /// User actively changing fields
    Editing,
    /// Create or update call in flight
    Submitting,
    /// Last operation failed, error collection non-empty
    Error,
    /// Navigation triggered, form is finished
    Done,
}

/// Reservation form controller
///
/// One instance per open form. The draft and error collection are owned
/// here; the UI shell renders from the accessors and feeds events in
/// through [`change`](Self::change) and [`submit`](Self::submit).
pub struct ReservationForm<A, N> {
    api: A,
    nav: N,
    config: ClientConfig,
    reservation_id: Option<ReservationId>,
    draft: ReservationDraft,
    errors: FieldErrors,
    state: FormState,
    cancel: CancellationToken,
}

impl<A: ReservationApi, N: Navigator> ReservationForm<A, N> {
    /// Create-mode form with an empty draft
    pub fn create(api: A, nav: N, config: ClientConfig) -> Self {
        Self {
            api,
            nav,
            config,
            reservation_id: None,
            draft: ReservationDraft::default(),
            errors: FieldErrors::new(),
            state: FormState::Idle,
            cancel: CancellationToken::new(),
        }
    }

    /// Edit-mode form; call [`hydrate`](Self::hydrate) to load the record
    pub fn edit(api: A, nav: N, config: ClientConfig, id: ReservationId) -> Self {
        Self {
            api,
            nav,
            config,
            reservation_id: Some(id),
            draft: ReservationDraft::default(),
            errors: FieldErrors::new(),
            state: FormState::Loading,
            cancel: CancellationToken::new(),
        }
    }

    // ========== Observable state ==========

    /// Current draft, as the shell should render it
    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    /// Current machine state
    pub fn state(&self) -> FormState {
        self.state
    }

    /// True while a create/update call is in flight (disables the submit control)
    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// True when the form edits an existing reservation
    pub fn is_edit(&self) -> bool {
        self.reservation_id.is_some()
    }

    /// Error collection keyed by source
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Rendered banner content: all findings in source order
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.messages()
    }

    /// Token observed by in-flight collaborator calls
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    // ========== Lifecycle ==========

    /// 编辑模式初始加载
    ///
    /// 创建模式下为 no-op。加载期间被 teardown 取消时直接返回，
    /// 不回写任何状态。
    pub async fn hydrate(&mut self) {
        let Some(id) = self.reservation_id else {
            return;
        };

        self.state = FormState::Loading;
        let cancel = self.cancel.clone();

        let result = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!(reservation_id = id, "Hydration cancelled during teardown");
                return;
            }
            result = self.api.read_reservation(id, cancel.clone()) => result,
        };

        // 取消可能在调用返回的同一时刻触发，落地前再查一次
        if cancel.is_cancelled() {
            return;
        }

        match result {
            Ok(reservation) => {
                self.draft = reservation.into();
                self.state = FormState::Editing;
            }
            Err(e) if e.is_cancelled() => {}
            Err(e) => {
                tracing::warn!(reservation_id = id, error = %e, "Failed to load reservation");
                self.errors.replace(ErrorSource::Load, vec![e.user_message()]);
                self.state = FormState::Error;
            }
        }
    }

    /// Tear the form down, cancelling any in-flight call
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    // ========== Event handlers ==========

    /// Field-change handler.
    ///
    /// 仅在 Idle/Editing/Error 状态下生效；手机号走规范化，
    /// 日期/时间走校验规则，其余字段原样落入草稿。
    pub fn change(&mut self, field: &str, value: &str) {
        match self.state {
            FormState::Idle | FormState::Editing | FormState::Error => {}
            FormState::Loading | FormState::Submitting | FormState::Done => {
                tracing::debug!(field, state = ?self.state, "Field change ignored");
                return;
            }
        }

        // 草稿按不可变值处理：先算出新草稿，再一次性提交
        let mut draft = self.draft.clone();
        match field {
            "first_name" => draft.first_name = value.to_string(),
            "last_name" => draft.last_name = value.to_string(),
            "mobile_number" => {
                draft.mobile_number = normalize_phone(value);
                tracing::debug!(normalized = %draft.mobile_number, "Phone input normalized");
            }
            "reservation_date" => {
                draft.reservation_date = value.to_string();
                let findings =
                    validate_reservation_date(value, now_millis(), self.config.business_tz);
                self.errors.replace(ErrorSource::Date, findings);
                // 日期重选后，上次提交失败的残留一并清掉
                self.errors.clear(ErrorSource::Submit);
            }
            "reservation_time" => {
                draft.reservation_time = value.to_string();
                self.errors
                    .replace(ErrorSource::Time, validate_reservation_time(value));
                self.errors.clear(ErrorSource::Submit);
            }
            "people" => {
                draft.people = value.trim().parse().unwrap_or(0);
            }
            other => {
                tracing::debug!(field = other, "Unknown field ignored");
                return;
            }
        }

        self.draft = draft;
        self.state = FormState::Editing;
    }

    /// Submit handler — 根据是否持有 reservation_id 选择创建或更新。
    ///
    /// 错误集合非空时不发请求；Submitting 状态下的重复提交被忽略。
    pub async fn submit(&mut self) {
        match self.state {
            FormState::Idle | FormState::Editing | FormState::Error => {}
            FormState::Submitting => {
                tracing::debug!("Submit ignored, a submission is already in flight");
                return;
            }
            FormState::Loading | FormState::Done => {
                tracing::debug!(state = ?self.state, "Submit ignored");
                return;
            }
        }

        if !self.errors.is_empty() {
            tracing::debug!("Submit suppressed, findings pending");
            return;
        }

        self.state = FormState::Submitting;
        let cancel = self.cancel.clone();
        let date = self.draft.reservation_date.clone();

        let result = if let Some(id) = self.reservation_id {
            // 更新前清掉上一次提交失败的残留
            self.errors.clear(ErrorSource::Submit);
            let mut draft = self.draft.clone();
            draft.reservation_id = Some(id);
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!(reservation_id = id, "Update cancelled during teardown");
                    return;
                }
                result = self.api.update_reservation(&draft, cancel.clone()) => result,
            }
        } else {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("Create cancelled during teardown");
                    return;
                }
                result = self.api.create_reservation(&self.draft, cancel.clone()) => result,
            }
        };

        if cancel.is_cancelled() {
            return;
        }

        match result {
            Ok(reservation) => {
                tracing::info!(
                    reservation_id = reservation.reservation_id,
                    date = %date,
                    "Reservation persisted"
                );
                self.state = FormState::Done;
                self.nav.navigate(&format!("/dashboard?date={date}"));
            }
            Err(e) if e.is_cancelled() => {}
            Err(e) => {
                tracing::warn!(error = %e, "Reservation submission failed");
                self.errors.push(ErrorSource::Submit, e.user_message());
                self.state = FormState::Error;
            }
        }
    }

    /// Cancel handler — 不持久化，直接返回上一页
    pub fn cancel(&self) {
        self.nav.back();
    }
}

impl<A, N> Drop for ReservationForm<A, N> {
    fn drop(&mut self) {
        // 防御性 cancel（调用方通常已 shutdown，但确保不遗漏）
        self.cancel.cancel();
    }
}
