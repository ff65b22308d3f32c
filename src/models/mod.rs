pub mod id;
pub mod post;
pub mod user;

pub use id::*;
pub use post::*;
pub use user::*;
