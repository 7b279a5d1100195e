mod alert_list;
mod clock;
mod device_panel;
mod mode_panel;
mod nav;
mod sensor_cards;
mod session_badge;
mod threshold_table;
mod toast;

pub use alert_list::AlertList;
pub use clock::Clock;
pub use device_panel::DevicePanel;
pub use mode_panel::ModePanel;
pub use nav::Nav;
pub use sensor_cards::SensorCards;
pub use session_badge::SessionBadge;
pub use threshold_table::ThresholdTable;
pub use toast::{ToastContainer, ToastKind, ToastProvider, use_toasts};
