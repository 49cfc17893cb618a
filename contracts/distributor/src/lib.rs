#![no_std]

mod contract;
mod controller;
mod distributor;
pub mod errors;
mod events;
pub mod storage;

#[cfg(test)]
mod tests;

pub use crate::contract::{ Distributor, DistributorClient };
