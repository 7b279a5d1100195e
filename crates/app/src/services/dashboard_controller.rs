//! Dashboard controller: the operator's commands against the Control API.
//!
//! Each command is a one-shot request/response cycle. Nothing is written to
//! the store before the response arrives, and a response is only applied
//! while its ticket is still the latest for the entity it touches.

use greenhouse_domain::dashboard::DashboardState;
use greenhouse_domain::device::DeviceStatus;
use greenhouse_domain::endpoint::Endpoint;
use greenhouse_domain::id::{AlertId, DeviceName};
use greenhouse_domain::mode::ControlMode;
use greenhouse_domain::sequence::EntityKey;
use greenhouse_domain::threshold::{ThresholdParam, parse_threshold_value};

use crate::config::ThresholdRefresh;
use crate::error::CommandError;
use crate::ports::{ControlApi, Notice, Operator, StateStore};

const CONFIRM_MODE_TOGGLE: &str = "Switch control mode?";
const CONFIRM_HANDLE_ALERT: &str = "Mark this alert as handled?";

/// What a [`DashboardController::refresh`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Devices whose status was merged from the server.
    pub devices_updated: usize,
    /// Whether the polled control mode was applied.
    pub mode_applied: bool,
}

/// Application service behind every dashboard button.
pub struct DashboardController<A, O, S> {
    api: A,
    operator: O,
    store: S,
    threshold_refresh: ThresholdRefresh,
}

impl<A: ControlApi, O: Operator, S: StateStore> DashboardController<A, O, S> {
    /// Create a controller that reloads the page after threshold updates.
    pub fn new(api: A, operator: O, store: S) -> Self {
        Self {
            api,
            operator,
            store,
            threshold_refresh: ThresholdRefresh::default(),
        }
    }

    /// Choose what happens after a threshold update is accepted.
    #[must_use]
    pub fn with_threshold_refresh(mut self, policy: ThresholdRefresh) -> Self {
        self.threshold_refresh = policy;
        self
    }

    /// The store this controller writes to.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Switch `device` to `status`.
    ///
    /// On success the device's badge, button caption and next action follow
    /// the new status. Refusals and transport failures are reported to the
    /// operator and leave the store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Rejected`] or [`CommandError::Transport`] on
    /// failure, and [`CommandError::Stale`] when a newer request for the same
    /// device superseded this one.
    #[tracing::instrument(skip(self), fields(device = %device, status = %status))]
    pub async fn set_device_status(
        &self,
        device: DeviceName,
        status: DeviceStatus,
    ) -> Result<(), CommandError> {
        let key = EntityKey::Device(device.clone());
        let ticket = self.store.update(|s| s.begin_request(key.clone()));

        let result = self
            .api
            .send(Endpoint::SetDeviceStatus {
                device: device.clone(),
                status,
            })
            .await;
        let current = self.store.update(|s| s.finish_request(&key, ticket));

        match result {
            Ok(resp) if resp.is_success() => {
                if !current {
                    tracing::debug!(ticket = ticket.get(), "discarding stale device response");
                    return Err(CommandError::Stale);
                }
                self.store.update(|s| s.set_device_status(device, status));
                Ok(())
            }
            Ok(resp) => {
                self.operator
                    .notify(Notice::DeviceCommandFailed(resp.message.clone()));
                Err(CommandError::Rejected {
                    message: resp.message,
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "device command failed");
                self.operator.notify(Notice::DeviceCommandFailed(None));
                Err(err.into())
            }
        }
    }

    /// Flip between automatic and manual control after confirmation.
    ///
    /// Device controls are re-derived from the new mode and the role held
    /// by the store when the response lands. Failures are logged only.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Cancelled`] when the operator declines, and
    /// the failure or staleness of the request otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_control_mode(&self) -> Result<ControlMode, CommandError> {
        if !self.operator.confirm(CONFIRM_MODE_TOGGLE) {
            return Err(CommandError::Cancelled);
        }

        let ticket = self.store.update(|s| s.begin_request(EntityKey::Mode));
        let result = self.api.send(Endpoint::ToggleMode).await;
        let current = self
            .store
            .update(|s| s.finish_request(&EntityKey::Mode, ticket));

        match result {
            Ok(resp) if resp.is_success() => {
                let mode = ControlMode::from_auto_flag(resp.auto_mode.unwrap_or(false));
                if !current {
                    tracing::debug!(ticket = ticket.get(), "discarding stale mode response");
                    return Err(CommandError::Stale);
                }
                let enabled = self.store.update(|s| {
                    s.set_mode(mode);
                    s.device_controls_enabled()
                });
                tracing::info!(%mode, device_controls_enabled = enabled, "control mode switched");
                Ok(mode)
            }
            Ok(resp) => {
                tracing::warn!(message = ?resp.message, "mode toggle refused");
                Err(CommandError::Rejected {
                    message: resp.message,
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "mode toggle failed");
                Err(err.into())
            }
        }
    }

    /// Acknowledge an alert after confirmation.
    ///
    /// Only alerts that are displayed and still unhandled can be
    /// acknowledged. On success the alert turns handled, which removes its
    /// action control.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::AlertUnavailable`] without sending anything
    /// when the alert has no action control, [`CommandError::Cancelled`]
    /// when the operator declines, and the failure of the request otherwise.
    #[tracing::instrument(skip(self), fields(alert = %id))]
    pub async fn handle_alert(&self, id: AlertId) -> Result<(), CommandError> {
        let actionable = self
            .store
            .read(|s| s.alert(id).is_some_and(|alert| !alert.is_handled()));
        if !actionable {
            return Err(CommandError::AlertUnavailable(id));
        }
        if !self.operator.confirm(CONFIRM_HANDLE_ALERT) {
            return Err(CommandError::Cancelled);
        }

        let key = EntityKey::Alert(id);
        let ticket = self.store.update(|s| s.begin_request(key.clone()));
        let result = self.api.send(Endpoint::HandleAlert(id)).await;
        self.store.update(|s| s.finish_request(&key, ticket));

        match result {
            Ok(resp) if resp.is_success() => {
                // Acknowledgment is idempotent, so any success may apply it.
                if self.store.update(|s| s.mark_alert_handled(id)) {
                    tracing::info!("alert acknowledged");
                }
                Ok(())
            }
            Ok(resp) => {
                self.operator.notify(Notice::AlertHandlingFailed);
                Err(CommandError::Rejected {
                    message: resp.message,
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "alert acknowledgment failed");
                self.operator.notify(Notice::AlertHandlingFailed);
                Err(err.into())
            }
        }
    }

    /// Ask the operator for a new value of `param` and submit it.
    ///
    /// Cancelled prompts and non-numeric input never reach the server. On
    /// success the operator is told so and the configured
    /// [`ThresholdRefresh`] policy runs.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Cancelled`], [`CommandError::InvalidInput`],
    /// or the failure of the request.
    #[tracing::instrument(skip(self), fields(param = %param))]
    pub async fn update_threshold(&self, param: ThresholdParam) -> Result<f64, CommandError> {
        let Some(input) = self
            .operator
            .prompt(&format!("Enter new {param} threshold:"))
        else {
            return Err(CommandError::Cancelled);
        };
        let value = parse_threshold_value(&input)?;

        match self.api.send(Endpoint::UpdateThreshold { param, value }).await {
            Ok(resp) if resp.is_success() => {
                self.operator.notify(Notice::ThresholdUpdated);
                match self.threshold_refresh {
                    ThresholdRefresh::Reload => self.operator.reload(),
                    ThresholdRefresh::InPlace => {
                        self.store.update(|s| s.set_threshold(param, value));
                    }
                }
                Ok(value)
            }
            Ok(resp) => {
                self.operator.notify(Notice::ThresholdUpdateFailed);
                Err(CommandError::Rejected {
                    message: resp.message,
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "threshold update failed");
                self.operator.notify(Notice::ThresholdUpdateFailed);
                Err(err.into())
            }
        }
    }

    /// Poll the latest sensor data, device statuses and control mode.
    ///
    /// Entities with a command in flight when a poll is sent, or sent while
    /// it is out, keep what the command produced. Failures are logged and
    /// never shown to the operator.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self) -> RefreshReport {
        let mut report = RefreshReport::default();

        let mark = self.store.read(DashboardState::poll_watermark);
        match self.api.latest_data().await {
            Ok(data) if data.is_success() => {
                report.devices_updated = self.store.update(|s| s.apply_latest_data(data, &mark));
            }
            Ok(data) => {
                tracing::debug!(message = ?data.message, "no latest data available");
            }
            Err(err) => tracing::warn!(error = %err, "latest data poll failed"),
        }

        let mark = self.store.read(DashboardState::poll_watermark);
        match self.api.send(Endpoint::ModeStatus).await {
            Ok(resp) if resp.is_success() => {
                if let Some(auto_mode) = resp.auto_mode {
                    let mode = ControlMode::from_auto_flag(auto_mode);
                    report.mode_applied =
                        self.store.update(|s| s.apply_polled_mode(mode, &mark));
                }
            }
            Ok(resp) => tracing::debug!(message = ?resp.message, "mode status unavailable"),
            Err(err) => tracing::warn!(error = %err, "mode status poll failed"),
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::future::Future;

    use greenhouse_domain::alert::{Alert, AlertStatus};
    use greenhouse_domain::dashboard::{Bootstrap, DashboardState};
    use greenhouse_domain::mode::Role;
    use greenhouse_domain::response::{ApiResponse, DeviceRecord, LatestData, ResponseStatus};
    use tokio::sync::oneshot;

    use crate::error::TransportError;
    use crate::store::LocalStore;

    type Reply = Result<ApiResponse, TransportError>;
    type DataReply = Result<LatestData, TransportError>;

    /// Replays canned replies in call order and records every endpoint.
    #[derive(Default)]
    struct ScriptedApi {
        replies: RefCell<VecDeque<Reply>>,
        deferred: RefCell<VecDeque<oneshot::Receiver<Reply>>>,
        latest: RefCell<Option<DataReply>>,
        latest_deferred: RefCell<Option<oneshot::Receiver<DataReply>>>,
        calls: RefCell<Vec<Endpoint>>,
    }

    impl ScriptedApi {
        fn reply(self, reply: Reply) -> Self {
            self.replies.borrow_mut().push_back(reply);
            self
        }

        /// Queue a reply the test completes later through the returned sender.
        fn defer(&self) -> oneshot::Sender<Reply> {
            let (tx, rx) = oneshot::channel();
            self.deferred.borrow_mut().push_back(rx);
            tx
        }

        /// Hold the next latest-data poll until the returned sender fires.
        fn defer_latest(&self) -> oneshot::Sender<DataReply> {
            let (tx, rx) = oneshot::channel();
            *self.latest_deferred.borrow_mut() = Some(rx);
            tx
        }

        fn calls(&self) -> Vec<Endpoint> {
            self.calls.borrow().clone()
        }
    }

    impl ControlApi for &ScriptedApi {
        fn send(&self, endpoint: Endpoint) -> impl Future<Output = Reply> {
            self.calls.borrow_mut().push(endpoint);
            let canned = self.replies.borrow_mut().pop_front();
            let deferred = if canned.is_none() {
                self.deferred.borrow_mut().pop_front()
            } else {
                None
            };
            async move {
                if let Some(reply) = canned {
                    return reply;
                }
                match deferred {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(TransportError::new("dropped"))),
                    None => Err(TransportError::new("no scripted reply")),
                }
            }
        }

        fn latest_data(&self) -> impl Future<Output = DataReply> {
            let canned = self.latest.borrow_mut().take();
            let deferred = self.latest_deferred.borrow_mut().take();
            async move {
                if let Some(reply) = canned {
                    return reply;
                }
                match deferred {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(TransportError::new("dropped"))),
                    None => Err(TransportError::new("no scripted data")),
                }
            }
        }
    }

    #[derive(Default)]
    struct RecordingOperator {
        answers: RefCell<VecDeque<bool>>,
        input: RefCell<Option<String>>,
        questions: RefCell<Vec<String>>,
        notices: RefCell<Vec<Notice>>,
        reloads: RefCell<usize>,
    }

    impl RecordingOperator {
        fn confirming(answer: bool) -> Self {
            let op = Self::default();
            op.answers.borrow_mut().push_back(answer);
            op
        }

        fn typing(input: Option<&str>) -> Self {
            let op = Self::default();
            *op.input.borrow_mut() = input.map(str::to_string);
            op
        }

        fn notices(&self) -> Vec<Notice> {
            self.notices.borrow().clone()
        }
    }

    impl Operator for &RecordingOperator {
        fn confirm(&self, question: &str) -> bool {
            self.questions.borrow_mut().push(question.to_string());
            self.answers.borrow_mut().pop_front().unwrap_or(true)
        }

        fn prompt(&self, question: &str) -> Option<String> {
            self.questions.borrow_mut().push(question.to_string());
            self.input.borrow_mut().take()
        }

        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }

        fn reload(&self) {
            *self.reloads.borrow_mut() += 1;
        }
    }

    fn name(value: &str) -> DeviceName {
        DeviceName::new(value).unwrap()
    }

    fn store(role: Role, auto_mode: bool) -> LocalStore {
        LocalStore::new(DashboardState::from_bootstrap(Bootstrap {
            role,
            auto_mode: Some(auto_mode),
            devices: vec![
                DeviceRecord {
                    device_name: name("heater"),
                    status: DeviceStatus::Off,
                    timestamp: None,
                },
                DeviceRecord {
                    device_name: name("fan"),
                    status: DeviceStatus::On,
                    timestamp: None,
                },
            ],
            alerts: vec![Alert {
                id: AlertId::new(5),
                param: "temperature".to_string(),
                value: Some(33.0),
                message: "Temperature too high".to_string(),
                created_at: None,
                status: AlertStatus::Unhandled,
            }],
            ..Bootstrap::default()
        }))
    }

    fn heater_status(store: &LocalStore) -> DeviceStatus {
        store.read(|s| s.device(&name("heater")).unwrap().status)
    }

    #[tokio::test]
    async fn should_flip_device_when_server_accepts() {
        let api = ScriptedApi::default().reply(Ok(ApiResponse::success()));
        let op = RecordingOperator::default();
        let ctrl = DashboardController::new(&api, &op, store(Role::Admin, false));

        ctrl.set_device_status(name("heater"), DeviceStatus::On)
            .await
            .unwrap();

        let device = ctrl.store().read(|s| s.device(&name("heater")).unwrap());
        assert_eq!(device.status, DeviceStatus::On);
        assert_eq!(device.button_label(), "Set to OFF");
        assert_eq!(device.next_action(), DeviceStatus::Off);
        assert_eq!(device.status_class(), "device-status status-on");
        assert_eq!(
            api.calls(),
            vec![Endpoint::SetDeviceStatus {
                device: name("heater"),
                status: DeviceStatus::On
            }]
        );
        assert!(op.notices().is_empty());
    }

    #[tokio::test]
    async fn should_keep_device_and_notify_when_server_refuses() {
        let api = ScriptedApi::default().reply(Ok(ApiResponse::error(Some(
            "Only admins may operate in auto mode",
        ))));
        let op = RecordingOperator::default();
        let ctrl = DashboardController::new(&api, &op, store(Role::Operator, true));

        let result = ctrl
            .set_device_status(name("heater"), DeviceStatus::On)
            .await;

        assert!(matches!(result, Err(CommandError::Rejected { .. })));
        assert_eq!(heater_status(ctrl.store()), DeviceStatus::Off);
        assert_eq!(
            op.notices(),
            vec![Notice::DeviceCommandFailed(Some(
                "Only admins may operate in auto mode".to_string()
            ))]
        );
    }

    #[tokio::test]
    async fn should_notify_generic_failure_when_transport_fails() {
        let api = ScriptedApi::default().reply(Err(TransportError::new("connection reset")));
        let op = RecordingOperator::default();
        let ctrl = DashboardController::new(&api, &op, store(Role::Admin, false));

        let result = ctrl
            .set_device_status(name("heater"), DeviceStatus::On)
            .await;

        assert!(matches!(result, Err(CommandError::Transport(_))));
        assert_eq!(heater_status(ctrl.store()), DeviceStatus::Off);
        assert_eq!(op.notices(), vec![Notice::DeviceCommandFailed(None)]);
        assert!(!ctrl.store().read(|s| s.is_pending(&EntityKey::Device(name("heater")))));
    }

    #[tokio::test]
    async fn should_discard_stale_device_response() {
        let api = ScriptedApi::default();
        let first = api.defer();
        let second = api.defer();
        let op = RecordingOperator::default();
        let ctrl = DashboardController::new(&api, &op, store(Role::Admin, false));

        let (older, newer, ()) = tokio::join!(
            ctrl.set_device_status(name("heater"), DeviceStatus::On),
            ctrl.set_device_status(name("heater"), DeviceStatus::Off),
            async {
                second.send(Ok(ApiResponse::success())).unwrap();
                tokio::task::yield_now().await;
                first.send(Ok(ApiResponse::success())).unwrap();
            }
        );

        assert_eq!(newer, Ok(()));
        assert_eq!(older, Err(CommandError::Stale));
        assert_eq!(heater_status(ctrl.store()), DeviceStatus::Off);
    }

    #[tokio::test]
    async fn should_not_send_mode_toggle_when_declined() {
        let api = ScriptedApi::default();
        let op = RecordingOperator::confirming(false);
        let ctrl = DashboardController::new(&api, &op, store(Role::Operator, false));

        let result = ctrl.toggle_control_mode().await;

        assert_eq!(result, Err(CommandError::Cancelled));
        assert!(api.calls().is_empty());
        assert_eq!(op.questions.borrow().as_slice(), [CONFIRM_MODE_TOGGLE]);
    }

    #[tokio::test]
    async fn should_lock_device_controls_when_switched_to_auto_for_non_admin() {
        let api = ScriptedApi::default().reply(Ok(ApiResponse::success().with_auto_mode(true)));
        let op = RecordingOperator::confirming(true);
        let ctrl = DashboardController::new(&api, &op, store(Role::Operator, false));
        assert!(ctrl.store().read(DashboardState::device_controls_enabled));

        let mode = ctrl.toggle_control_mode().await.unwrap();

        assert_eq!(mode, ControlMode::Auto);
        assert_eq!(
            ctrl.store().read(|s| s.mode().map(ControlMode::label)),
            Some("Current mode: Auto".to_string())
        );
        assert!(!ctrl.store().read(DashboardState::device_controls_enabled));
    }

    #[tokio::test]
    async fn should_keep_device_controls_for_admin_in_auto_mode() {
        let api = ScriptedApi::default().reply(Ok(ApiResponse::success().with_auto_mode(true)));
        let op = RecordingOperator::confirming(true);
        let ctrl = DashboardController::new(&api, &op, store(Role::Admin, false));

        ctrl.toggle_control_mode().await.unwrap();

        assert!(ctrl.store().read(DashboardState::device_controls_enabled));
    }

    #[tokio::test]
    async fn should_discard_stale_mode_response() {
        let api = ScriptedApi::default();
        let first = api.defer();
        let second = api.defer();
        let op = RecordingOperator::default();
        let ctrl = DashboardController::new(&api, &op, store(Role::Admin, false));

        let (older, newer, ()) = tokio::join!(
            ctrl.toggle_control_mode(),
            ctrl.toggle_control_mode(),
            async {
                second
                    .send(Ok(ApiResponse::success().with_auto_mode(false)))
                    .unwrap();
                tokio::task::yield_now().await;
                first
                    .send(Ok(ApiResponse::success().with_auto_mode(true)))
                    .unwrap();
            }
        );

        assert_eq!(newer, Ok(ControlMode::Manual));
        assert_eq!(older, Err(CommandError::Stale));
        assert_eq!(ctrl.store().read(DashboardState::mode), Some(ControlMode::Manual));
        assert!(!ctrl.store().read(|s| s.is_pending(&EntityKey::Mode)));
    }

    #[tokio::test]
    async fn should_leave_mode_untouched_and_silent_when_toggle_fails() {
        let api = ScriptedApi::default().reply(Ok(ApiResponse::error(Some("Mode switch failed"))));
        let op = RecordingOperator::confirming(true);
        let ctrl = DashboardController::new(&api, &op, store(Role::Admin, false));

        let result = ctrl.toggle_control_mode().await;

        assert!(matches!(result, Err(CommandError::Rejected { .. })));
        assert_eq!(ctrl.store().read(DashboardState::mode), Some(ControlMode::Manual));
        assert!(op.notices().is_empty());
    }

    #[tokio::test]
    async fn should_read_missing_auto_mode_as_manual() {
        let api = ScriptedApi::default().reply(Ok(ApiResponse::success()));
        let op = RecordingOperator::confirming(true);
        let ctrl = DashboardController::new(&api, &op, store(Role::Viewer, true));

        assert_eq!(ctrl.toggle_control_mode().await, Ok(ControlMode::Manual));
    }

    #[tokio::test]
    async fn should_mark_alert_handled_and_block_repeat() {
        let api = ScriptedApi::default().reply(Ok(ApiResponse::success()));
        let op = RecordingOperator::default();
        let ctrl = DashboardController::new(&api, &op, store(Role::Operator, true));
        let id = AlertId::new(5);

        ctrl.handle_alert(id).await.unwrap();

        assert!(ctrl.store().read(|s| s.alert(id).unwrap().is_handled()));
        assert_eq!(
            ctrl.handle_alert(id).await,
            Err(CommandError::AlertUnavailable(id))
        );
        assert_eq!(api.calls(), vec![Endpoint::HandleAlert(id)]);
    }

    #[tokio::test]
    async fn should_not_send_alert_acknowledgment_when_declined() {
        let api = ScriptedApi::default();
        let op = RecordingOperator::confirming(false);
        let ctrl = DashboardController::new(&api, &op, store(Role::Operator, true));

        let result = ctrl.handle_alert(AlertId::new(5)).await;

        assert_eq!(result, Err(CommandError::Cancelled));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn should_notify_when_alert_acknowledgment_fails() {
        let api = ScriptedApi::default().reply(Ok(ApiResponse::error(None)));
        let op = RecordingOperator::default();
        let ctrl = DashboardController::new(&api, &op, store(Role::Operator, true));
        let id = AlertId::new(5);

        let result = ctrl.handle_alert(id).await;

        assert!(matches!(result, Err(CommandError::Rejected { .. })));
        assert!(!ctrl.store().read(|s| s.alert(id).unwrap().is_handled()));
        assert_eq!(op.notices(), vec![Notice::AlertHandlingFailed]);
    }

    #[tokio::test]
    async fn should_refuse_unknown_alert_without_request() {
        let api = ScriptedApi::default();
        let op = RecordingOperator::default();
        let ctrl = DashboardController::new(&api, &op, store(Role::Operator, true));

        let result = ctrl.handle_alert(AlertId::new(404)).await;

        assert_eq!(result, Err(CommandError::AlertUnavailable(AlertId::new(404))));
        assert!(op.questions.borrow().is_empty());
    }

    #[tokio::test]
    async fn should_not_send_threshold_when_input_is_not_numeric() {
        let api = ScriptedApi::default();
        let op = RecordingOperator::typing(Some("warm"));
        let ctrl = DashboardController::new(&api, &op, store(Role::Admin, false));

        let result = ctrl.update_threshold(ThresholdParam::TempMax).await;

        assert!(matches!(result, Err(CommandError::InvalidInput(_))));
        assert!(api.calls().is_empty());
        assert!(op.notices().is_empty());
    }

    #[tokio::test]
    async fn should_not_send_threshold_when_prompt_cancelled() {
        let api = ScriptedApi::default();
        let op = RecordingOperator::typing(None);
        let ctrl = DashboardController::new(&api, &op, store(Role::Admin, false));

        let result = ctrl.update_threshold(ThresholdParam::TempMax).await;

        assert_eq!(result, Err(CommandError::Cancelled));
        assert!(api.calls().is_empty());
        assert_eq!(
            op.questions.borrow().as_slice(),
            ["Enter new temp_max threshold:"]
        );
    }

    #[tokio::test]
    async fn should_reload_after_threshold_update_by_default() {
        let api = ScriptedApi::default().reply(Ok(ApiResponse::success()));
        let op = RecordingOperator::typing(Some(" 29.5 "));
        let ctrl = DashboardController::new(&api, &op, store(Role::Admin, false));

        let value = ctrl.update_threshold(ThresholdParam::TempMax).await.unwrap();

        assert_eq!(value, 29.5);
        assert_eq!(
            api.calls(),
            vec![Endpoint::UpdateThreshold {
                param: ThresholdParam::TempMax,
                value: 29.5
            }]
        );
        assert_eq!(op.notices(), vec![Notice::ThresholdUpdated]);
        assert_eq!(*op.reloads.borrow(), 1);
    }

    #[tokio::test]
    async fn should_update_threshold_in_place_when_configured() {
        let api = ScriptedApi::default().reply(Ok(ApiResponse::success()));
        let op = RecordingOperator::typing(Some("55"));
        let ctrl = DashboardController::new(&api, &op, store(Role::Admin, false))
            .with_threshold_refresh(ThresholdRefresh::InPlace);

        ctrl.update_threshold(ThresholdParam::HumidityMin)
            .await
            .unwrap();

        assert_eq!(*op.reloads.borrow(), 0);
        assert_eq!(
            ctrl.store()
                .read(|s| s.threshold(ThresholdParam::HumidityMin)),
            55.0
        );
    }

    #[tokio::test]
    async fn should_notify_when_threshold_update_fails() {
        let api = ScriptedApi::default().reply(Ok(ApiResponse::error(Some("Invalid value"))));
        let op = RecordingOperator::typing(Some("12"));
        let ctrl = DashboardController::new(&api, &op, store(Role::Admin, false));

        let result = ctrl.update_threshold(ThresholdParam::Co2Min).await;

        assert!(matches!(result, Err(CommandError::Rejected { .. })));
        assert_eq!(op.notices(), vec![Notice::ThresholdUpdateFailed]);
        assert_eq!(*op.reloads.borrow(), 0);
    }

    #[tokio::test]
    async fn should_merge_polled_data_and_mode() {
        let api = ScriptedApi::default().reply(Ok(ApiResponse::success().with_auto_mode(true)));
        *api.latest.borrow_mut() = Some(Ok(LatestData {
            status: ResponseStatus::Success,
            message: None,
            sensor_data: None,
            devices: vec![DeviceRecord {
                device_name: name("heater"),
                status: DeviceStatus::On,
                timestamp: None,
            }],
        }));
        let op = RecordingOperator::default();
        let ctrl = DashboardController::new(&api, &op, store(Role::Viewer, false));

        let report = ctrl.refresh().await;

        assert_eq!(
            report,
            RefreshReport {
                devices_updated: 1,
                mode_applied: true
            }
        );
        assert_eq!(heater_status(ctrl.store()), DeviceStatus::On);
        assert_eq!(ctrl.store().read(DashboardState::mode), Some(ControlMode::Auto));
        assert_eq!(api.calls(), vec![Endpoint::ModeStatus]);
    }

    #[tokio::test]
    async fn should_stay_silent_when_refresh_fails() {
        let api = ScriptedApi::default().reply(Err(TransportError::new("offline")));
        let op = RecordingOperator::default();
        let ctrl = DashboardController::new(&api, &op, store(Role::Viewer, false));

        let report = ctrl.refresh().await;

        assert_eq!(report, RefreshReport::default());
        assert!(op.notices().is_empty());
    }

    #[tokio::test]
    async fn should_keep_device_command_result_when_earlier_poll_lands_late() {
        let api = ScriptedApi::default().reply(Ok(ApiResponse::success()));
        let poll = api.defer_latest();
        let op = RecordingOperator::default();
        let ctrl = DashboardController::new(&api, &op, store(Role::Admin, false));

        let (report, command) = tokio::join!(ctrl.refresh(), async {
            let command = ctrl
                .set_device_status(name("heater"), DeviceStatus::On)
                .await;
            poll.send(Ok(LatestData {
                status: ResponseStatus::Success,
                message: None,
                sensor_data: None,
                devices: vec![
                    DeviceRecord {
                        device_name: name("heater"),
                        status: DeviceStatus::Off,
                        timestamp: None,
                    },
                    DeviceRecord {
                        device_name: name("fan"),
                        status: DeviceStatus::Off,
                        timestamp: None,
                    },
                ],
            }))
            .unwrap();
            command
        });

        assert_eq!(command, Ok(()));
        assert_eq!(report.devices_updated, 1);
        assert_eq!(heater_status(ctrl.store()), DeviceStatus::On);
        assert_eq!(
            ctrl.store().read(|s| s.device(&name("fan")).unwrap().status),
            DeviceStatus::Off
        );
    }

    #[tokio::test]
    async fn should_keep_toggled_mode_when_earlier_mode_poll_lands_late() {
        let api = ScriptedApi::default();
        let poll = api.defer();
        let toggle = api.defer();
        let op = RecordingOperator::default();
        let ctrl = DashboardController::new(&api, &op, store(Role::Admin, false));

        let (report, toggled, ()) = tokio::join!(
            ctrl.refresh(),
            async {
                // Let the poll go out before the toggle.
                tokio::task::yield_now().await;
                ctrl.toggle_control_mode().await
            },
            async {
                tokio::task::yield_now().await;
                toggle
                    .send(Ok(ApiResponse::success().with_auto_mode(true)))
                    .unwrap();
                tokio::task::yield_now().await;
                tokio::task::yield_now().await;
                poll.send(Ok(ApiResponse::success().with_auto_mode(false)))
                    .unwrap();
            }
        );

        assert_eq!(toggled, Ok(ControlMode::Auto));
        assert!(!report.mode_applied);
        assert_eq!(ctrl.store().read(DashboardState::mode), Some(ControlMode::Auto));
        assert_eq!(api.calls(), vec![Endpoint::ModeStatus, Endpoint::ToggleMode]);
    }
}
