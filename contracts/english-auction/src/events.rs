use commons::{AUCTION_ENDED_TAG, HIGHEST_BID_INCREASED_TAG, WITHDRAWN_TAG};
use concordium_std::*;

/// A new highest bid was accepted.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct HighestBidIncreasedEvent {
    /// Bidder account address.
    pub bidder: AccountAddress,
    /// Bid amount.
    pub amount: Amount,
}

/// A displaced bidder collected their pending returns.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct WithdrawnEvent {
    /// Account the refund was sent to.
    pub account: AccountAddress,
    /// Refunded amount.
    pub amount: Amount,
}

/// The auction was settled.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct AuctionEndedEvent {
    /// Address of the auction winner. `None` if nobody bid.
    pub winner: Option<AccountAddress>,
    /// Amount paid to the seller.
    pub amount: Amount,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum AuctionEvent {
    HighestBidIncreased(HighestBidIncreasedEvent),
    Withdrawn(WithdrawnEvent),
    AuctionEnded(AuctionEndedEvent),
}

impl AuctionEvent {
    pub fn highest_bid_increased(bidder: AccountAddress, amount: Amount) -> Self {
        Self::HighestBidIncreased(HighestBidIncreasedEvent { bidder, amount })
    }

    pub fn withdrawn(account: AccountAddress, amount: Amount) -> Self {
        Self::Withdrawn(WithdrawnEvent { account, amount })
    }

    pub fn auction_ended(winner: Option<AccountAddress>, amount: Amount) -> Self {
        Self::AuctionEnded(AuctionEndedEvent { winner, amount })
    }
}

impl Serial for AuctionEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            AuctionEvent::HighestBidIncreased(event) => {
                out.write_u8(HIGHEST_BID_INCREASED_TAG)?;
                event.serial(out)
            }
            AuctionEvent::Withdrawn(event) => {
                out.write_u8(WITHDRAWN_TAG)?;
                event.serial(out)
            }
            AuctionEvent::AuctionEnded(event) => {
                out.write_u8(AUCTION_ENDED_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for AuctionEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            HIGHEST_BID_INCREASED_TAG => {
                HighestBidIncreasedEvent::deserial(source).map(AuctionEvent::HighestBidIncreased)
            }
            WITHDRAWN_TAG => WithdrawnEvent::deserial(source).map(AuctionEvent::Withdrawn),
            AUCTION_ENDED_TAG => {
                AuctionEndedEvent::deserial(source).map(AuctionEvent::AuctionEnded)
            }
            _ => Err(ParseError::default()),
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    const ALICE: AccountAddress = AccountAddress([1u8; 32]);

    #[concordium_test]
    fn test_event_tags() {
        let bytes = to_bytes(&AuctionEvent::highest_bid_increased(
            ALICE,
            Amount::from_micro_ccd(7),
        ));
        claim_eq!(bytes[0], HIGHEST_BID_INCREASED_TAG);
        claim_eq!(&bytes[1..33], &ALICE.0[..]);

        let bytes = to_bytes(&AuctionEvent::auction_ended(None, Amount::zero()));
        claim_eq!(bytes[0], AUCTION_ENDED_TAG);
        claim_eq!(bytes[1], 0, "Missing winner is encoded as None");
    }

    #[concordium_test]
    fn test_unknown_tag_rejected() {
        let result: ParseResult<AuctionEvent> = from_bytes(&[0u8, 1, 2]);
        claim!(result.is_err());
    }
}
