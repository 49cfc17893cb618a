#![no_std]

mod admin;
mod allowance;
mod balance;
mod contract;
pub mod errors;
mod events;
mod storage_types;


pub use crate::contract::{ EazyToken, EazyTokenClient };
