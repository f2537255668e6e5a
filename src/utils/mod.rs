// Shared utils

pub mod constants;
pub mod datetime;
pub mod dom;
pub mod storage;
pub mod token;

pub use constants::*;
pub use datetime::*;
pub use dom::*;
pub use storage::*;
pub use token::*;
