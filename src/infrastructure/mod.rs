pub mod storage;
pub mod views;
pub mod webhooks;
