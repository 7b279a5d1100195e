//! Dashboard view state.
//!
//! [`DashboardState`] is the single source of truth for everything the
//! dashboard renders. Views derive button captions, badges, disabled flags
//! and alert markers from it; nothing is patched in place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::alert::Alert;
use crate::device::{Device, DeviceStatus};
use crate::history::HistoryWindow;
use crate::id::{AlertId, DeviceName};
use crate::mode::{self, ControlMode, Role};
use crate::response::{DeviceRecord, LatestData};
use crate::sensor::SensorReading;
use crate::sequence::{EntityKey, RequestSequencer, Ticket, Watermark};
use crate::threshold::ThresholdParam;

/// Initial data embedded in the page by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bootstrap {
    pub username: Option<String>,
    pub role: Role,
    pub auto_mode: Option<bool>,
    pub devices: Vec<DeviceRecord>,
    pub alerts: Vec<Alert>,
    pub thresholds: BTreeMap<ThresholdParam, f64>,
    pub sensor_data: Option<SensorReading>,
    /// Readings of the history page, oldest first.
    pub history: Vec<SensorReading>,
    /// Span the server used for `history`.
    pub history_hours: Option<u32>,
}

/// Everything the dashboard displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    username: Option<String>,
    role: Role,
    mode: Option<ControlMode>,
    devices: BTreeMap<DeviceName, DeviceStatus>,
    alerts: BTreeMap<AlertId, Alert>,
    thresholds: BTreeMap<ThresholdParam, f64>,
    sensors: Option<SensorReading>,
    history: Vec<SensorReading>,
    history_window: HistoryWindow,
    sequencer: RequestSequencer,
}

impl DashboardState {
    /// Seed the state from the server-rendered bootstrap document.
    ///
    /// Thresholds the server did not report keep their factory defaults.
    #[must_use]
    pub fn from_bootstrap(bootstrap: Bootstrap) -> Self {
        let mut thresholds: BTreeMap<ThresholdParam, f64> = ThresholdParam::ALL
            .into_iter()
            .map(|param| (param, param.default_value()))
            .collect();
        thresholds.extend(bootstrap.thresholds);

        Self {
            username: bootstrap.username,
            role: bootstrap.role,
            mode: bootstrap.auto_mode.map(ControlMode::from_auto_flag),
            devices: bootstrap
                .devices
                .into_iter()
                .map(|record| (record.device_name, record.status))
                .collect(),
            alerts: bootstrap
                .alerts
                .into_iter()
                .map(|alert| (alert.id, alert))
                .collect(),
            thresholds,
            sensors: bootstrap.sensor_data,
            history: bootstrap.history,
            history_window: bootstrap
                .history_hours
                .map_or_else(HistoryWindow::default, HistoryWindow::new),
            sequencer: RequestSequencer::new(),
        }
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Current control mode, `None` until the server has reported one.
    #[must_use]
    pub fn mode(&self) -> Option<ControlMode> {
        self.mode
    }

    /// Whether device buttons accept clicks, given the mode and the role
    /// held right now.
    ///
    /// An unknown mode is treated as automatic.
    #[must_use]
    pub fn device_controls_enabled(&self) -> bool {
        mode::device_controls_enabled(self.mode.unwrap_or_default(), &self.role)
    }

    /// All devices, ordered by name.
    #[must_use]
    pub fn devices(&self) -> Vec<Device> {
        self.devices
            .iter()
            .map(|(name, status)| Device::new(name.clone(), *status))
            .collect()
    }

    #[must_use]
    pub fn device(&self, name: &DeviceName) -> Option<Device> {
        self.devices
            .get(name)
            .map(|status| Device::new(name.clone(), *status))
    }

    /// All alerts, newest first.
    #[must_use]
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.values().rev().cloned().collect()
    }

    #[must_use]
    pub fn alert(&self, id: AlertId) -> Option<&Alert> {
        self.alerts.get(&id)
    }

    #[must_use]
    pub fn thresholds(&self) -> Vec<(ThresholdParam, f64)> {
        self.thresholds
            .iter()
            .map(|(param, value)| (*param, *value))
            .collect()
    }

    #[must_use]
    pub fn threshold(&self, param: ThresholdParam) -> f64 {
        self.thresholds
            .get(&param)
            .copied()
            .unwrap_or_else(|| param.default_value())
    }

    #[must_use]
    pub fn sensors(&self) -> Option<&SensorReading> {
        self.sensors.as_ref()
    }

    /// Readings the server embedded for the history page.
    #[must_use]
    pub fn history(&self) -> &[SensorReading] {
        &self.history
    }

    #[must_use]
    pub fn history_window(&self) -> HistoryWindow {
        self.history_window
    }

    /// Issue a ticket for a request about to be sent.
    pub fn begin_request(&mut self, key: EntityKey) -> Ticket {
        self.sequencer.issue(key)
    }

    /// Close a request. Returns `true` when its response may be applied.
    pub fn finish_request(&mut self, key: &EntityKey, ticket: Ticket) -> bool {
        self.sequencer.settle(key, ticket)
    }

    #[must_use]
    pub fn is_pending(&self, key: &EntityKey) -> bool {
        self.sequencer.is_pending(key)
    }

    /// Mark the moment a poll is sent. Pass the result to the merge.
    #[must_use]
    pub fn poll_watermark(&self) -> Watermark {
        self.sequencer.watermark()
    }

    pub fn set_device_status(&mut self, name: DeviceName, status: DeviceStatus) {
        self.devices.insert(name, status);
    }

    pub fn set_mode(&mut self, mode: ControlMode) {
        self.mode = Some(mode);
    }

    /// Mark an alert handled. Returns `false` if it is unknown or already
    /// handled.
    pub fn mark_alert_handled(&mut self, id: AlertId) -> bool {
        self.alerts.get_mut(&id).is_some_and(Alert::mark_handled)
    }

    pub fn set_threshold(&mut self, param: ThresholdParam, value: f64) {
        self.thresholds.insert(param, value);
    }

    /// Merge a `get-latest-data` body polled at `since`.
    ///
    /// Devices with a command in flight, or one sent since the poll went
    /// out, keep their displayed status. Returns the number of devices
    /// updated.
    pub fn apply_latest_data(&mut self, data: LatestData, since: &Watermark) -> usize {
        if let Some(reading) = data.sensor_data {
            self.sensors = Some(reading);
        }
        let mut updated = 0;
        for record in data.devices {
            let key = EntityKey::Device(record.device_name.clone());
            if !self.sequencer.is_quiet_since(&key, since) {
                continue;
            }
            self.devices.insert(record.device_name, record.status);
            updated += 1;
        }
        updated
    }

    /// Merge a mode polled at `since` unless a toggle overlapped the poll.
    ///
    /// Returns `true` when the mode was applied.
    pub fn apply_polled_mode(&mut self, mode: ControlMode, since: &Watermark) -> bool {
        if !self.sequencer.is_quiet_since(&EntityKey::Mode, since) {
            return false;
        }
        self.mode = Some(mode);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::AlertStatus;
    use crate::response::ResponseStatus;

    fn name(value: &str) -> DeviceName {
        DeviceName::new(value).unwrap()
    }

    fn record(device: &str, status: DeviceStatus) -> DeviceRecord {
        DeviceRecord {
            device_name: name(device),
            status,
            timestamp: None,
        }
    }

    fn alert(id: u64) -> Alert {
        Alert {
            id: AlertId::new(id),
            param: "humidity".to_string(),
            value: Some(41.0),
            message: "Humidity too low".to_string(),
            created_at: None,
            status: AlertStatus::Unhandled,
        }
    }

    fn bootstrap() -> Bootstrap {
        Bootstrap {
            username: Some("ops".to_string()),
            role: Role::Operator,
            auto_mode: Some(false),
            devices: vec![
                record("heater", DeviceStatus::Off),
                record("fan", DeviceStatus::On),
            ],
            alerts: vec![alert(1), alert(2)],
            thresholds: BTreeMap::from([(ThresholdParam::TempMax, 30.0)]),
            ..Bootstrap::default()
        }
    }

    #[test]
    fn should_seed_state_from_bootstrap() {
        let state = DashboardState::from_bootstrap(bootstrap());
        assert_eq!(state.username(), Some("ops"));
        assert_eq!(state.mode(), Some(ControlMode::Manual));
        assert_eq!(state.devices().len(), 2);
        assert_eq!(
            state.device(&name("fan")).unwrap().status,
            DeviceStatus::On
        );
    }

    #[test]
    fn should_fill_missing_thresholds_with_defaults() {
        let state = DashboardState::from_bootstrap(bootstrap());
        assert_eq!(state.threshold(ThresholdParam::TempMax), 30.0);
        assert_eq!(state.threshold(ThresholdParam::TempMin), 18.0);
        assert_eq!(state.thresholds().len(), ThresholdParam::ALL.len());
    }

    #[test]
    fn should_list_alerts_newest_first() {
        let state = DashboardState::from_bootstrap(bootstrap());
        let ids: Vec<u64> = state.alerts().iter().map(|a| a.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn should_treat_unknown_mode_as_auto() {
        let operator = DashboardState::default();
        assert!(!operator.device_controls_enabled());

        let admin = DashboardState::from_bootstrap(Bootstrap {
            role: Role::Admin,
            ..Bootstrap::default()
        });
        assert_eq!(admin.mode(), None);
        assert!(admin.device_controls_enabled());
    }

    #[test]
    fn should_derive_controls_from_mode_and_role() {
        let mut operator = DashboardState::from_bootstrap(bootstrap());
        assert!(operator.device_controls_enabled());
        operator.set_mode(ControlMode::Auto);
        assert!(!operator.device_controls_enabled());

        let mut admin = DashboardState::from_bootstrap(Bootstrap {
            role: Role::Admin,
            ..bootstrap()
        });
        admin.set_mode(ControlMode::Auto);
        assert!(admin.device_controls_enabled());
    }

    #[test]
    fn should_mark_alert_handled_once() {
        let mut state = DashboardState::from_bootstrap(bootstrap());
        assert!(state.mark_alert_handled(AlertId::new(1)));
        assert!(!state.mark_alert_handled(AlertId::new(1)));
        assert!(!state.mark_alert_handled(AlertId::new(99)));
    }

    #[test]
    fn should_skip_pending_devices_when_merging_latest_data() {
        let mut state = DashboardState::from_bootstrap(bootstrap());
        let heater = EntityKey::Device(name("heater"));
        let _ticket = state.begin_request(heater);
        let mark = state.poll_watermark();

        let updated = state.apply_latest_data(
            LatestData {
                status: ResponseStatus::Success,
                message: None,
                sensor_data: None,
                devices: vec![
                    record("heater", DeviceStatus::On),
                    record("fan", DeviceStatus::Off),
                    record("light", DeviceStatus::On),
                ],
            },
            &mark,
        );

        assert_eq!(updated, 2);
        assert_eq!(
            state.device(&name("heater")).unwrap().status,
            DeviceStatus::Off
        );
        assert_eq!(
            state.device(&name("fan")).unwrap().status,
            DeviceStatus::Off
        );
        assert!(state.device(&name("light")).is_some());
    }

    #[test]
    fn should_ignore_polled_mode_while_toggle_in_flight() {
        let mut state = DashboardState::from_bootstrap(bootstrap());
        let ticket = state.begin_request(EntityKey::Mode);
        let mark = state.poll_watermark();
        assert!(!state.apply_polled_mode(ControlMode::Auto, &mark));
        assert_eq!(state.mode(), Some(ControlMode::Manual));

        state.finish_request(&EntityKey::Mode, ticket);
        let mark = state.poll_watermark();
        assert!(state.apply_polled_mode(ControlMode::Auto, &mark));
        assert_eq!(state.mode(), Some(ControlMode::Auto));
    }

    #[test]
    fn should_keep_command_result_when_earlier_poll_lands_after_it() {
        let mut state = DashboardState::from_bootstrap(bootstrap());
        let mark = state.poll_watermark();

        let heater = EntityKey::Device(name("heater"));
        let ticket = state.begin_request(heater.clone());
        assert!(state.finish_request(&heater, ticket));
        state.set_device_status(name("heater"), DeviceStatus::On);

        let updated = state.apply_latest_data(
            LatestData {
                status: ResponseStatus::Success,
                message: None,
                sensor_data: None,
                devices: vec![
                    record("heater", DeviceStatus::Off),
                    record("fan", DeviceStatus::Off),
                ],
            },
            &mark,
        );

        assert_eq!(updated, 1);
        assert_eq!(
            state.device(&name("heater")).unwrap().status,
            DeviceStatus::On
        );
        assert_eq!(
            state.device(&name("fan")).unwrap().status,
            DeviceStatus::Off
        );
    }

    #[test]
    fn should_keep_toggled_mode_when_earlier_poll_lands_after_it() {
        let mut state = DashboardState::from_bootstrap(bootstrap());
        let mark = state.poll_watermark();

        let ticket = state.begin_request(EntityKey::Mode);
        state.finish_request(&EntityKey::Mode, ticket);
        state.set_mode(ControlMode::Auto);

        assert!(!state.apply_polled_mode(ControlMode::Manual, &mark));
        assert_eq!(state.mode(), Some(ControlMode::Auto));
    }

    #[test]
    fn should_parse_bootstrap_document_with_missing_sections() {
        let json = r#"{"role": "admin", "auto_mode": true}"#;
        let bootstrap: Bootstrap = serde_json::from_str(json).unwrap();
        let state = DashboardState::from_bootstrap(bootstrap);
        assert!(state.role().is_admin());
        assert!(state.devices().is_empty());
        assert!(state.device_controls_enabled());
    }

    #[test]
    fn should_seed_history_from_bootstrap() {
        let json = r#"{
            "history_hours": 48,
            "history": [
                {"temperature": 21.5, "humidity": 60.0, "light_intensity": 4000.0,
                 "co2_level": 450.0, "timestamp": "2026-03-07 08:00:00"}
            ]
        }"#;
        let bootstrap: Bootstrap = serde_json::from_str(json).unwrap();
        let state = DashboardState::from_bootstrap(bootstrap);
        assert_eq!(state.history_window().hours(), 48);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].temperature, 21.5);
    }

    #[test]
    fn should_default_history_window_when_bootstrap_omits_it() {
        let state = DashboardState::from_bootstrap(bootstrap());
        assert_eq!(state.history_window(), HistoryWindow::default());
        assert!(state.history().is_empty());

        let zero = DashboardState::from_bootstrap(Bootstrap {
            history_hours: Some(0),
            ..Bootstrap::default()
        });
        assert_eq!(zero.history_window().hours(), 24);
    }
}
