pub mod agent_profile;
pub mod user_position;
pub mod vault;

pub use agent_profile::*;
pub use user_position::*;
pub use vault::*;
