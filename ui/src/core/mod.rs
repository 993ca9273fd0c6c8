//! Platform-agnostic core: locale and carousel controllers, content, and the
//! host adapters that back their traits.

pub mod content;
pub mod locale;
pub mod platform;
pub mod rail;
pub mod storage;
