use eazyswap::error::ErrorCode as SharedError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    MathError = 1,
    CastingFailure = 2,
    ZeroAmount = 3,
    NegativeAmount = 4,
    #[doc = "Redeem duration is below the configured minimum"]
    DurationTooLow = 5,
    RedeemNotFound = 6,
    #[doc = "Redeem cannot be finalized before the minimum duration elapsed"]
    RedeemTooEarly = 7,
    #[doc = "Amount exceeds the usage approval or the current allocation"]
    UnauthorizedAmount = 8,
    DeallocationFeeTooHigh = 9,
    InvalidRedeemSettings = 10,
    #[doc = "Neither side of a share transfer is whitelisted"]
    TransferNotAllowed = 11,
    CannotRemoveSelf = 12,
    InsufficientBalance = 13,
    InsufficientAllowance = 14,
    InvalidExpirationLedger = 15,
    AdminNotSet = 16,
    ConfigNotSet = 17,
    DecimalTooLarge = 18,
}

impl From<SharedError> for ErrorCode {
    fn from(error: SharedError) -> Self {
        match error {
            SharedError::MathError => ErrorCode::MathError,
            SharedError::CastingFailure => ErrorCode::CastingFailure,
        }
    }
}
