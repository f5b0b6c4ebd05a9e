use super::*;
use core::fmt;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Only account addresses can bid (Error code: -4).
    OnlyAccountAddress,
    /// Duration is zero or ends beyond the representable time (Error code: -5).
    InvalidDuration,
    /// Raised if bid does not exceed the highest bid (Error code: -6).
    BidTooLow,
    /// Raised if bid is placed after the end time or after settlement
    /// (Error code: -7).
    AuctionEnded,
    /// Raised if there is an attempt to end the auction before its end time
    /// (Error code: -8).
    AuctionNotYetEnded,
    /// Raised if the auction is ended a second time (Error code: -9).
    AlreadyEnded,
    /// Failed to invoke a transfer (Error code: -10).
    TransferFailed,
}

impl CustomContractError {
    /// Reason string describing the reject code for off-chain tooling.
    /// Tooling matches on these, keep them stable.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::ParseParams => "Failed to parse parameter",
            Self::LogFull => "Event log is full",
            Self::LogMalformed => "Event log is malformed",
            Self::OnlyAccountAddress => "Only accounts can bid",
            Self::InvalidDuration => "Invalid auction duration",
            Self::BidTooLow => "There already is a higher bid",
            Self::AuctionEnded => "Auction already ended",
            Self::AuctionNotYetEnded => "Auction not yet ended",
            Self::AlreadyEnded => "endAuction has already been called",
            Self::TransferFailed => "Transfer failed",
        }
    }
}

impl fmt::Display for CustomContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to transfers to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::TransferFailed
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_reason_strings() {
        claim_eq!(
            CustomContractError::AuctionEnded.reason(),
            "Auction already ended"
        );
        claim_eq!(
            CustomContractError::BidTooLow.reason(),
            "There already is a higher bid"
        );
        claim_eq!(
            format!("{}", CustomContractError::AuctionNotYetEnded),
            "Auction not yet ended"
        );
        claim_eq!(
            CustomContractError::InvalidDuration.reason(),
            "Invalid auction duration"
        );
        claim_eq!(
            format!("{}", CustomContractError::AlreadyEnded),
            "endAuction has already been called"
        );
    }

    #[concordium_test]
    fn test_reject_codes() {
        let codes = [
            (CustomContractError::ParseParams, -1),
            (CustomContractError::BidTooLow, -6),
            (CustomContractError::AuctionEnded, -7),
            (CustomContractError::AuctionNotYetEnded, -8),
            (CustomContractError::AlreadyEnded, -9),
            (CustomContractError::TransferFailed, -10),
        ];
        for (error, code) in codes {
            let reject: Reject = error.into();
            claim_eq!(reject.error_code.get(), code);
        }
    }

    #[concordium_test]
    fn test_conversions() {
        claim_eq!(
            CustomContractError::from(TransferError::AmountTooLarge),
            CustomContractError::TransferFailed
        );
        claim_eq!(
            CustomContractError::from(TransferError::MissingAccount),
            CustomContractError::TransferFailed
        );
        claim_eq!(
            CustomContractError::from(LogError::Full),
            CustomContractError::LogFull
        );
        claim_eq!(
            CustomContractError::from(ParseError::default()),
            CustomContractError::ParseParams
        );
    }
}
