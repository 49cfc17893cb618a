pub mod pool;
pub mod stake;
