pub mod home;
pub mod users;

pub use home::*;
pub use users::*;
