pub mod dispatch;
pub mod global;
pub mod import;
pub mod random;
pub mod search;
pub mod shared;
