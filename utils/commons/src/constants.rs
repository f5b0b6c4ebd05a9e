/// Tag for the HighestBidIncreased event.
pub const HIGHEST_BID_INCREASED_TAG: u8 = u8::MAX - 1;

/// Tag for the Withdrawn event.
pub const WITHDRAWN_TAG: u8 = u8::MAX - 2;

/// Tag for the AuctionEnded event.
pub const AUCTION_ENDED_TAG: u8 = u8::MAX - 3;
