//! 데이터 수집 모듈.

pub mod indicator_collect;
pub mod scheduler;

pub use indicator_collect::{Collector, MAX_ATTEMPTS};
pub use scheduler::run_scheduler;
