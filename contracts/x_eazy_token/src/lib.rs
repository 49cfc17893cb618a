#![no_std]

mod allowance;
mod balance;
mod contract;
mod controller;
pub mod errors;
mod events;
pub mod storage;
mod usage;
mod x_eazy_token;


pub use crate::contract::{ XEazyToken, XEazyTokenClient };
