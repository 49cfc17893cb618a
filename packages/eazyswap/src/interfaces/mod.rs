//! Capability interfaces the contracts use to reach their collaborators.
//! Each trait generates a typed client; the collaborator is addressed only
//! by its contract `Address`.

pub mod escrow;
pub mod token;
pub mod usage;
