use concordium_std::*;

/// Type of the parameter to the `init` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct InitParameter {
    /// Auction duration in seconds, counted from the slot time of
    /// initialization.
    pub duration: u64,
}

/// The part of the state to be viewed using `concordium-client contract invoke`.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ViewableState {
    /// Account receiving the winning bid.
    pub seller: AccountAddress,
    /// Bids are accepted strictly before this time.
    pub end_time: Timestamp,
    /// Current leader, if anybody has bid.
    pub highest_bidder: Option<AccountAddress>,
    /// Current leading bid, zero if nobody has bid.
    pub highest_bid: Amount,
    /// Whether `endAuction` has paid out the seller.
    pub ended: bool,
    /// Funds still owed: the highest bid until it is paid out, plus every
    /// pending return. The contract balance never drops below this.
    pub escrowed: Amount,
}
