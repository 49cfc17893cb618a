pub mod allocation;
pub mod redeem;
pub mod shares;
