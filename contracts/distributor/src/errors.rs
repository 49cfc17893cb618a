use eazyswap::error::ErrorCode as SharedError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    MathError = 1,
    CastingFailure = 2,
    NegativeAmount = 3,
    InvalidPoolId = 4,
    #[doc = "A pool already stakes this token"]
    PoolAlreadyExists = 5,
    DepositFeeTooHigh = 6,
    HarvestIntervalTooHigh = 7,
    #[doc = "Emission split or xEAZY share out of range"]
    InvalidPercent = 8,
    #[doc = "Withdraw exceeds the user stake or the pool total"]
    WithdrawTooLarge = 9,
    TooManyPools = 10,
    AdminNotSet = 11,
    ConfigNotSet = 12,
}

impl From<SharedError> for ErrorCode {
    fn from(error: SharedError) -> Self {
        match error {
            SharedError::MathError => ErrorCode::MathError,
            SharedError::CastingFailure => ErrorCode::CastingFailure,
        }
    }
}
