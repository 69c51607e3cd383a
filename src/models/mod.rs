pub mod action;
pub mod event;
pub mod expected;
pub mod session;
pub mod summary;
