pub mod mock;
pub mod sessions;
pub mod token;

pub use mock::{AuthConfig, AuthService};
pub use sessions::{SessionStore, SessionUser, Toast};
