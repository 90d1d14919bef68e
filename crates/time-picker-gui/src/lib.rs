pub mod state;
pub mod ui;
pub mod view;

pub use state::PickerApp;
pub use view::{EstimatedTimePanel, View};
