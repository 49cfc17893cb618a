use eazyswap::error::ErrorCode as SharedError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    MathError = 1,
    CastingFailure = 2,
    NegativeAmount = 3,
    InsufficientBalance = 4,
    InsufficientAllowance = 5,
    InvalidExpirationLedger = 6,
    NotMinter = 7,
    DecimalTooLarge = 8,
    AdminNotSet = 9,
}

impl From<SharedError> for ErrorCode {
    fn from(error: SharedError) -> Self {
        match error {
            SharedError::MathError => ErrorCode::MathError,
            SharedError::CastingFailure => ErrorCode::CastingFailure,
        }
    }
}
