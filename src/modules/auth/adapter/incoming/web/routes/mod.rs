mod fetch_profile;
mod login_user;
mod register_user;
mod update_profile;

pub use fetch_profile::*;
pub use login_user::*;
pub use register_user::*;
pub use update_profile::*;
