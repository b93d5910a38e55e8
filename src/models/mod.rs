pub mod audit_log;
pub mod candidate;
pub mod chat;
pub mod interview;
pub mod job;
pub mod settings;
