//! Platform-agnostic plumbing shared by every task: clocks, formatting, paths and the CSV log sink.

pub mod audio;
pub mod format;
pub mod platform;
pub mod storage;
pub mod timing;
