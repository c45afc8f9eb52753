pub mod about;
pub mod home;
pub mod marketplace;
pub mod tracking;

pub use about::about_page;
pub use home::home_page;
pub use marketplace::{marketplace_page, MarketplaceVm};
pub use tracking::tracking_page;
