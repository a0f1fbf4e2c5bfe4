pub mod auth;
pub mod forgot_password;
pub mod listings;
pub mod property_detail;

pub use auth::{auth_page, AuthPrefill, AuthTab};
pub use forgot_password::forgot_password_page;
pub use listings::{listings_page, ListingsVm};
pub use property_detail::{property_detail_page, PropertyDetailVm};
