use eazyswap::error::ErrorCode as SharedError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    MathError = 1,
    CastingFailure = 2,
    ZeroAmount = 3,
    #[doc = "Unlock time is in the past or earlier than the current one"]
    InvalidUnlockTime = 4,
    LockNotFound = 5,
    NotLockOwner = 6,
    StillLocked = 7,
}

impl From<SharedError> for ErrorCode {
    fn from(error: SharedError) -> Self {
        match error {
            SharedError::MathError => ErrorCode::MathError,
            SharedError::CastingFailure => ErrorCode::CastingFailure,
        }
    }
}
