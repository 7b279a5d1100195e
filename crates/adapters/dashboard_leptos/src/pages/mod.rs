mod alerts;
mod control;
mod history;
mod home;
mod not_found;
mod status;

pub use alerts::Alerts;
pub use control::Control;
pub use history::History;
pub use home::Home;
pub use not_found::NotFound;
pub use status::Status;
