#![no_std]

mod contract;
pub mod errors;
mod events;
mod lp_lock;
pub mod storage;


pub use crate::contract::{ LpLock, LpLockClient };
