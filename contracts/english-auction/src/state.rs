use commons::CustomContractError;
use concordium_std::*;

use crate::external::ViewableState;

/// The state in which an auction can be.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub enum AuctionState {
    /// Still accepting bids.
    Open,
    /// The end time has passed or the seller was already paid. There is no
    /// way back to `Open`.
    Closed,
}

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Seller account address.
    pub seller: AccountAddress,
    /// Auction end time.
    pub end_time: Timestamp,
    /// Account of the current highest bid.
    pub highest_bidder: Option<AccountAddress>,
    /// Current highest bid.
    pub highest_bid: Amount,
    /// Set by settlement. Only a failed payout clears it again.
    pub ended: bool,
    /// Displaced bids owed back to their bidders.
    pub pending_returns: StateMap<AccountAddress, Amount, S>,
}

impl<S: HasStateApi> State<S> {
    /// Create a new state with no bids.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        seller: AccountAddress,
        end_time: Timestamp,
    ) -> Self {
        Self {
            seller,
            end_time,
            highest_bidder: None,
            highest_bid: Amount::zero(),
            ended: false,
            pending_returns: state_builder.new_map(),
        }
    }

    /// Get auction state at given slot_time
    pub fn auction_state(&self, slot_time: Timestamp) -> AuctionState {
        if self.ended || slot_time >= self.end_time {
            AuctionState::Closed
        } else {
            AuctionState::Open
        }
    }

    /// Check that `amount` would be accepted as the new highest bid.
    pub fn check_bid(
        &self,
        slot_time: Timestamp,
        amount: Amount,
    ) -> Result<(), CustomContractError> {
        ensure!(
            self.auction_state(slot_time) == AuctionState::Open,
            CustomContractError::AuctionEnded
        );
        ensure!(amount > self.highest_bid, CustomContractError::BidTooLow);
        Ok(())
    }

    /// Make `amount` the highest bid. The displaced bid is credited to its
    /// bidder's pending returns, on top of anything not yet withdrawn.
    pub fn bid(
        &mut self,
        slot_time: Timestamp,
        bidder: AccountAddress,
        amount: Amount,
    ) -> Result<(), CustomContractError> {
        self.check_bid(slot_time, amount)?;

        if let Some(previous) = self.highest_bidder.replace(bidder) {
            let mut owed = self
                .pending_returns
                .entry(previous)
                .or_insert_with(Amount::zero);
            *owed += self.highest_bid;
        }
        self.highest_bid = amount;

        Ok(())
    }

    /// Amount owed to `account`.
    pub fn pending_return(&self, account: &AccountAddress) -> Amount {
        self.pending_returns
            .get(account)
            .map(|amount| *amount)
            .unwrap_or_else(Amount::zero)
    }

    /// Zero the balance owed to `account` and return what it was.
    ///
    /// Must happen before the refund is transferred.
    pub fn take_pending_return(&mut self, account: &AccountAddress) -> Amount {
        let amount = self.pending_return(account);
        if amount > Amount::zero() {
            self.pending_returns.remove(account);
        }
        amount
    }

    /// Give back a balance taken by `take_pending_return` whose refund failed.
    pub fn restore_pending_return(&mut self, account: AccountAddress, amount: Amount) {
        let mut owed = self
            .pending_returns
            .entry(account)
            .or_insert_with(Amount::zero);
        *owed += amount;
    }

    /// Mark the auction as ended and return the payout owed to the seller.
    pub fn close(&mut self, slot_time: Timestamp) -> Result<Amount, CustomContractError> {
        ensure!(
            slot_time >= self.end_time,
            CustomContractError::AuctionNotYetEnded
        );
        ensure!(!self.ended, CustomContractError::AlreadyEnded);

        self.ended = true;

        Ok(self.highest_bid)
    }

    /// Undo `close` after the seller payout failed.
    pub fn reopen(&mut self) {
        self.ended = false;
    }

    /// Funds the contract still owes to bidders and the seller.
    pub fn escrowed(&self) -> Amount {
        let held = if self.ended {
            Amount::zero()
        } else {
            self.highest_bid
        };
        self.pending_returns
            .iter()
            .fold(held, |total, (_, amount)| total + *amount)
    }

    pub fn view(&self) -> ViewableState {
        ViewableState {
            seller: self.seller,
            end_time: self.end_time,
            highest_bidder: self.highest_bidder,
            highest_bid: self.highest_bid,
            ended: self.ended,
            escrowed: self.escrowed(),
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const SELLER: AccountAddress = AccountAddress([0u8; 32]);
    const ALICE: AccountAddress = AccountAddress([1u8; 32]);
    const BOB: AccountAddress = AccountAddress([2u8; 32]);
    const END: u64 = 60_000;

    fn at(millis: u64) -> Timestamp {
        Timestamp::from_timestamp_millis(millis)
    }

    fn fresh_state(state_builder: &mut TestStateBuilder) -> State<TestStateApi> {
        State::new(state_builder, SELLER, at(END))
    }

    #[concordium_test]
    fn test_auction_state_is_lazy() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        claim_eq!(state.auction_state(at(0)), AuctionState::Open);
        claim_eq!(state.auction_state(at(END - 1)), AuctionState::Open);
        claim_eq!(state.auction_state(at(END)), AuctionState::Closed);

        state.ended = true;
        claim_eq!(state.auction_state(at(0)), AuctionState::Closed);
    }

    #[concordium_test]
    fn test_highest_bid_only_increases() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        let offers = [(ALICE, 5), (BOB, 5), (BOB, 3), (BOB, 8), (ALICE, 8), (ALICE, 13)];
        let mut previous = Amount::zero();
        for (bidder, micro_ccd) in offers.iter() {
            let before = state.view();
            let amount = Amount::from_micro_ccd(*micro_ccd);
            match state.bid(at(1), *bidder, amount) {
                Ok(()) => {
                    claim!(state.highest_bid > previous, "Highest bid must increase");
                    claim_eq!(state.highest_bidder, Some(*bidder));
                    previous = state.highest_bid;
                }
                Err(err) => {
                    claim_eq!(err, CustomContractError::BidTooLow);
                    claim_eq!(state.view(), before, "Rejected bid must not change state");
                }
            }
        }

        claim_eq!(state.highest_bid, Amount::from_micro_ccd(13));
        claim_eq!(state.highest_bidder, Some(ALICE));
        claim_eq!(state.pending_return(&ALICE), Amount::from_micro_ccd(5));
        claim_eq!(state.pending_return(&BOB), Amount::from_micro_ccd(8));
    }

    #[concordium_test]
    fn test_leader_outbidding_itself() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        claim_eq!(state.bid(at(1), ALICE, Amount::from_micro_ccd(10)), Ok(()));
        claim_eq!(state.bid(at(2), ALICE, Amount::from_micro_ccd(15)), Ok(()));

        claim_eq!(state.highest_bidder, Some(ALICE));
        claim_eq!(state.pending_return(&ALICE), Amount::from_micro_ccd(10));
        claim_eq!(state.escrowed(), Amount::from_micro_ccd(25));
    }

    #[concordium_test]
    fn test_check_bid_leaves_state() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        claim_eq!(state.bid(at(1), ALICE, Amount::from_micro_ccd(10)), Ok(()));
        let before = state.view();

        claim_eq!(state.check_bid(at(2), Amount::from_micro_ccd(20)), Ok(()));
        claim_eq!(
            state.check_bid(at(2), Amount::from_micro_ccd(10)),
            Err(CustomContractError::BidTooLow)
        );
        claim_eq!(
            state.check_bid(at(END), Amount::from_micro_ccd(20)),
            Err(CustomContractError::AuctionEnded)
        );
        claim_eq!(state.view(), before);
    }

    #[concordium_test]
    fn test_bid_after_end_time() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        claim_eq!(
            state.bid(at(END), ALICE, Amount::from_micro_ccd(1)),
            Err(CustomContractError::AuctionEnded)
        );
        claim_eq!(
            state.bid(at(END + 1), ALICE, Amount::from_micro_ccd(1)),
            Err(CustomContractError::AuctionEnded)
        );
        claim_eq!(state.highest_bidder, None);
    }

    #[concordium_test]
    fn test_take_and_restore_pending_return() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        claim_eq!(state.bid(at(1), ALICE, Amount::from_micro_ccd(10)), Ok(()));
        claim_eq!(state.bid(at(2), BOB, Amount::from_micro_ccd(20)), Ok(()));

        claim_eq!(state.take_pending_return(&ALICE), Amount::from_micro_ccd(10));
        claim_eq!(state.pending_return(&ALICE), Amount::zero());
        claim_eq!(state.take_pending_return(&ALICE), Amount::zero());

        state.restore_pending_return(ALICE, Amount::from_micro_ccd(10));
        claim_eq!(state.pending_return(&ALICE), Amount::from_micro_ccd(10));
    }

    #[concordium_test]
    fn test_close_once() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        claim_eq!(state.bid(at(1), ALICE, Amount::from_micro_ccd(10)), Ok(()));

        claim_eq!(
            state.close(at(END - 1)),
            Err(CustomContractError::AuctionNotYetEnded)
        );
        claim!(!state.ended);

        claim_eq!(state.close(at(END)), Ok(Amount::from_micro_ccd(10)));
        claim!(state.ended);
        claim_eq!(state.escrowed(), Amount::zero());

        claim_eq!(
            state.close(at(END + 1)),
            Err(CustomContractError::AlreadyEnded)
        );

        state.reopen();
        claim!(!state.ended);
        claim_eq!(state.escrowed(), Amount::from_micro_ccd(10));
    }
}
