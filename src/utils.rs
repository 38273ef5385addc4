pub mod keyed_lock;
pub mod latency;
pub mod logs;
