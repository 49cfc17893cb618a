use soroban_sdk::contracterror;

/// Errors raised by the shared math helpers. Contracts reserve the same
/// discriminants for these variants and convert with `From`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    MathError = 1,
    CastingFailure = 2,
}

pub type EazyResult<T = ()> = core::result::Result<T, ErrorCode>;
