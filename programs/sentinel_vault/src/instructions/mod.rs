pub mod admin;
pub mod guardian;
pub mod oracle;
pub mod vault;

pub use admin::*;
pub use guardian::*;
pub use oracle::*;
pub use vault::*;
