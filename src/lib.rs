//! # hwbot
//!
//! Telegram notifier for Yandex Practicum homework review status.
//!
//! Polls the homework-status endpoint on a fixed interval and forwards
//! status changes to a configured chat. Failures inside a poll cycle
//! are reported to the same chat, once per distinct error message.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod poller;
pub mod telemetry;
