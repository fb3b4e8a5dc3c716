//! Custom widget components

mod activity_feed;
mod command_bar;
mod detail_overlay;
mod distribution;
mod header;
pub mod modal_overlay;
mod session_list;
mod status_bar;
mod tests_panel;

pub use activity_feed::ActivityFeed;
pub use command_bar::CommandBar;
pub use detail_overlay::DetailOverlayView;
pub use distribution::DistributionChart;
pub use header::Header;
pub use session_list::SessionList;
pub use status_bar::StatusBar;
pub use tests_panel::TestsPanel;
