use commons::{ContractResult, CustomContractError};
use concordium_std::*;

use crate::events::AuctionEvent;
use crate::external::*;
use crate::state::{AuctionState, State};

/// Init function that opens a new auction. The account creating the
/// instance is the seller.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Duration is zero or the end time overflows.
#[init(contract = "EnglishAuction", parameter = "InitParameter")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let parameter: InitParameter = ctx.parameter_cursor().get()?;
    ensure!(
        parameter.duration > 0,
        CustomContractError::InvalidDuration.into()
    );

    let end_time = parameter
        .duration
        .checked_mul(1000)
        .map(Duration::from_millis)
        .and_then(|duration| ctx.metadata().slot_time().checked_add(duration))
        .ok_or(CustomContractError::InvalidDuration)?;

    Ok(State::new(state_builder, ctx.init_origin(), end_time))
}

/// Receive function in which accounts bid the attached amount before the
/// auction end time. Nothing is transferred: the displaced bid stays with the
/// contract until its bidder withdraws it.
///
/// It rejects if:
/// - Sender is a contract.
/// - The auction has ended.
/// - The amount does not exceed the highest bid.
/// - Fails to log `HighestBidIncreased` event.
#[receive(
    contract = "EnglishAuction",
    name = "bid",
    mutable,
    payable,
    enable_logger
)]
fn bid<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let bidder = match ctx.sender() {
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress),
        Address::Account(account_address) => account_address,
    };

    let slot_time = ctx.metadata().slot_time();
    host.state().check_bid(slot_time, amount)?;

    // Log before touching the state so a full log leaves the auction as it was
    logger.log(&AuctionEvent::highest_bid_increased(bidder, amount))?;

    host.state_mut().bid(slot_time, bidder, amount)?;

    Ok(())
}

/// Send the sender everything they are owed for displaced bids. Calling it
/// with nothing owed succeeds without effect, also after the auction ended.
///
/// It rejects if:
/// - Fails to log `Withdrawn` event.
/// - The refund transfer fails.
///
/// The owed balance is kept on rejection.
#[receive(contract = "EnglishAuction", name = "withdraw", mutable, enable_logger)]
fn withdraw<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let account = match ctx.sender() {
        // Contracts can not bid, so nothing is ever owed to them
        Address::Contract(_) => return Ok(()),
        Address::Account(account_address) => account_address,
    };

    // Zero the balance before handing out funds
    let amount = host.state_mut().take_pending_return(&account);
    if amount == Amount::zero() {
        return Ok(());
    }

    if let Err(err) = logger.log(&AuctionEvent::withdrawn(account, amount)) {
        host.state_mut().restore_pending_return(account, amount);
        bail!(err.into());
    }

    if host.invoke_transfer(&account, amount).is_err() {
        host.state_mut().restore_pending_return(account, amount);
        bail!(CustomContractError::TransferFailed);
    }

    Ok(())
}

/// End the auction and send the highest bid to the seller. Anybody may call
/// it once the end time has passed.
///
/// It rejects if:
/// - The end time has not been reached.
/// - The auction was already ended.
/// - Fails to log `AuctionEnded` event.
/// - The payout to the seller fails.
///
/// The auction stays unsettled on rejection.
#[receive(
    contract = "EnglishAuction",
    name = "endAuction",
    mutable,
    enable_logger
)]
fn end_auction<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let payout = host.state_mut().close(ctx.metadata().slot_time())?;
    let seller = host.state().seller;
    let winner = host.state().highest_bidder;

    if let Err(err) = logger.log(&AuctionEvent::auction_ended(winner, payout)) {
        host.state_mut().reopen();
        bail!(err.into());
    }

    // Without bids there is nothing to pay out
    if payout > Amount::zero() && host.invoke_transfer(&seller, payout).is_err() {
        host.state_mut().reopen();
        bail!(CustomContractError::TransferFailed);
    }

    Ok(())
}

/// View function that returns the contents of the state except the map of
/// pending returns.
#[receive(
    contract = "EnglishAuction",
    name = "view",
    return_value = "ViewableState"
)]
fn view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ViewableState> {
    Ok(host.state().view())
}

/// View function that returns the amount an account can withdraw.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "EnglishAuction",
    name = "viewPendingReturn",
    parameter = "AccountAddress",
    return_value = "Amount"
)]
fn view_pending_return<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Amount> {
    let account: AccountAddress = ctx.parameter_cursor().get()?;
    Ok(host.state().pending_return(&account))
}

/// View function that returns whether bids are accepted at the current slot
/// time.
#[receive(
    contract = "EnglishAuction",
    name = "auctionState",
    return_value = "AuctionState"
)]
fn auction_state<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<AuctionState> {
    Ok(host.state().auction_state(ctx.metadata().slot_time()))
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const SELLER: AccountAddress = AccountAddress([0u8; 32]);
    const BIDDER_1: AccountAddress = AccountAddress([1u8; 32]);
    const BIDDER_2: AccountAddress = AccountAddress([2u8; 32]);
    const STRANGER: AccountAddress = AccountAddress([3u8; 32]);
    const OTHER_CONTRACT: ContractAddress = ContractAddress {
        index: 7,
        subindex: 0,
    };

    /// Slot time of initialization, in milliseconds.
    const START: u64 = 1_000_000;
    /// Auction duration, in seconds.
    const DURATION: u64 = 60;
    const END: u64 = START + DURATION * 1000;

    type Host = TestHost<State<TestStateApi>>;

    fn new_host() -> Host {
        let parameter_bytes = to_bytes(&InitParameter { duration: DURATION });
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(SELLER);
        ctx.set_parameter(&parameter_bytes);
        ctx.set_metadata_slot_time(Timestamp::from_timestamp_millis(START));

        let mut state_builder = TestStateBuilder::new();
        let state = init(&ctx, &mut state_builder).expect_report("Initialization should pass");
        TestHost::new(state, state_builder)
    }

    fn new_ctx<'a>(sender: Address, slot_time: u64) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender);
        ctx.set_metadata_slot_time(Timestamp::from_timestamp_millis(slot_time));
        ctx
    }

    fn ccd(amount: u64) -> Amount {
        Amount::from_ccd(amount)
    }

    /// Bid the way the chain does it: the attached amount is part of the
    /// contract balance while the receive function runs and is bounced back
    /// on rejection.
    fn place_bid(
        host: &mut Host,
        bidder: AccountAddress,
        amount: Amount,
        slot_time: u64,
        logger: &mut TestLogger,
    ) -> ContractResult<()> {
        let ctx = new_ctx(Address::Account(bidder), slot_time);
        let balance = host.self_balance();
        host.set_self_balance(balance + amount);
        let result = bid(&ctx, host, amount, logger);
        if result.is_err() {
            host.set_self_balance(balance);
        }
        result
    }

    fn call_withdraw(
        host: &mut Host,
        account: AccountAddress,
        slot_time: u64,
    ) -> ContractResult<()> {
        let ctx = new_ctx(Address::Account(account), slot_time);
        let mut logger = TestLogger::init();
        withdraw(&ctx, host, &mut logger)
    }

    fn call_end_auction(
        host: &mut Host,
        sender: AccountAddress,
        slot_time: u64,
    ) -> ContractResult<()> {
        let ctx = new_ctx(Address::Account(sender), slot_time);
        let mut logger = TestLogger::init();
        end_auction(&ctx, host, &mut logger)
    }

    fn expect_error<E, T>(expr: Result<T, E>, err: E, msg: &str)
    where
        E: Eq + core::fmt::Debug,
        T: core::fmt::Debug,
    {
        let actual = expr.expect_err(msg);
        claim_eq!(actual, err);
    }

    #[concordium_test]
    /// The creator becomes the seller and the end time lies `duration`
    /// seconds after creation.
    fn test_init() {
        let host = new_host();
        let view = host.state().view();

        claim_eq!(view.seller, SELLER);
        claim_eq!(view.end_time, Timestamp::from_timestamp_millis(END));
        claim_eq!(view.highest_bidder, None);
        claim_eq!(view.highest_bid, Amount::zero());
        claim!(!view.ended);
        claim_eq!(view.escrowed, Amount::zero());
    }

    #[concordium_test]
    fn test_init_invalid_duration() {
        for duration in [0, u64::MAX] {
            let parameter_bytes = to_bytes(&InitParameter { duration });
            let mut ctx = TestInitContext::empty();
            ctx.set_init_origin(SELLER);
            ctx.set_parameter(&parameter_bytes);
            ctx.set_metadata_slot_time(Timestamp::from_timestamp_millis(START));
            let mut state_builder = TestStateBuilder::new();

            let result = init(&ctx, &mut state_builder);
            let reject = result.err().expect_report("Initialization should fail");
            let expected: Reject = CustomContractError::InvalidDuration.into();
            claim_eq!(reject.error_code, expected.error_code);
        }
    }

    #[concordium_test]
    /// Walks through a full auction:
    /// 1. Bidder 1 bids 1 CCD and leads.
    /// 2. Bidder 2 bids 0.5 CCD and is rejected, nothing changes.
    /// 3. Bidder 2 bids 2 CCD and leads, bidder 1 is owed 1 CCD.
    /// 4. Bidder 1 withdraws 1 CCD.
    /// 5. After the end time bidder 1 ends the auction, the seller gets 2 CCD.
    /// 6. Further bids are rejected.
    fn test_auction_bid_withdraw_and_end() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, BIDDER_1, ccd(1), START + 1, &mut logger), Ok(()));
        claim_eq!(host.state().highest_bidder, Some(BIDDER_1));
        claim_eq!(host.state().highest_bid, ccd(1));

        let before = host.state().view();
        expect_error(
            place_bid(
                &mut host,
                BIDDER_2,
                Amount::from_micro_ccd(500_000),
                START + 2,
                &mut logger,
            ),
            CustomContractError::BidTooLow,
            "Lower bid should be rejected",
        );
        claim_eq!(host.state().view(), before, "Rejected bid must not change state");

        claim_eq!(place_bid(&mut host, BIDDER_2, ccd(2), START + 3, &mut logger), Ok(()));
        claim_eq!(host.state().highest_bidder, Some(BIDDER_2));
        claim_eq!(host.state().pending_return(&BIDDER_1), ccd(1));

        claim_eq!(call_withdraw(&mut host, BIDDER_1, START + 4), Ok(()));
        claim!(host.transfer_occurred(&BIDDER_1, ccd(1)));
        claim_eq!(host.state().pending_return(&BIDDER_1), Amount::zero());

        claim_eq!(call_end_auction(&mut host, BIDDER_1, END), Ok(()));
        claim!(host.transfer_occurred(&SELLER, ccd(2)));
        claim!(host.state().ended);

        expect_error(
            place_bid(&mut host, BIDDER_1, ccd(5), END + 1, &mut logger),
            CustomContractError::AuctionEnded,
            "Bidding should fail because the auction has ended",
        );
    }

    #[concordium_test]
    /// Bids for amounts equal to the highest bid should be rejected.
    fn test_auction_bid_equal() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, BIDDER_1, ccd(1), START, &mut logger), Ok(()));
        expect_error(
            place_bid(&mut host, BIDDER_2, ccd(1), START, &mut logger),
            CustomContractError::BidTooLow,
            "Equal bid should be rejected",
        );
        claim_eq!(host.state().highest_bidder, Some(BIDDER_1));
        claim_eq!(host.state().pending_return(&BIDDER_2), Amount::zero());
        claim_eq!(host.state().pending_return(&BIDDER_1), Amount::zero());
    }

    #[concordium_test]
    /// Bids for 0 CCD should be rejected.
    fn test_auction_bid_zero() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        expect_error(
            place_bid(&mut host, BIDDER_1, Amount::zero(), START, &mut logger),
            CustomContractError::BidTooLow,
            "Bidding zero should fail",
        );
        claim_eq!(host.state().highest_bidder, None);
        claim_eq!(logger.logs.len(), 0, "Nothing should be logged");
    }

    #[concordium_test]
    /// No bid is accepted from the end time on, whatever the amount.
    fn test_auction_bid_at_end_time() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, BIDDER_1, ccd(1), END - 1, &mut logger), Ok(()));
        expect_error(
            place_bid(&mut host, BIDDER_2, ccd(100), END, &mut logger),
            CustomContractError::AuctionEnded,
            "Bid at the end time should fail",
        );
        claim_eq!(host.state().highest_bidder, Some(BIDDER_1));
    }

    #[concordium_test]
    fn test_auction_bid_from_contract() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        let ctx = new_ctx(Address::Contract(OTHER_CONTRACT), START);

        expect_error(
            bid(&ctx, &mut host, ccd(1), &mut logger),
            CustomContractError::OnlyAccountAddress,
            "Contracts should not be able to bid",
        );
        claim_eq!(host.state().highest_bidder, None);
    }

    #[concordium_test]
    /// Every displaced bid is owed back, and the balance covers what is owed.
    fn test_pending_returns_accumulate() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        for (bidder, amount) in [(BIDDER_1, 1), (BIDDER_2, 2), (BIDDER_1, 3), (BIDDER_2, 4)] {
            claim_eq!(place_bid(&mut host, bidder, ccd(amount), START, &mut logger), Ok(()));
            claim!(
                host.self_balance() >= host.state().escrowed(),
                "Balance must cover every bid held"
            );
        }

        claim_eq!(host.state().pending_return(&BIDDER_1), ccd(4));
        claim_eq!(host.state().pending_return(&BIDDER_2), ccd(2));
        claim_eq!(host.state().highest_bid, ccd(4));
        claim_eq!(host.state().escrowed(), ccd(10));

        claim_eq!(call_withdraw(&mut host, BIDDER_2, START), Ok(()));
        claim!(host.transfer_occurred(&BIDDER_2, ccd(2)));
        claim!(host.self_balance() >= host.state().escrowed());
    }

    #[concordium_test]
    /// Withdrawing with nothing owed succeeds and moves no funds.
    fn test_withdraw_nothing_owed() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, BIDDER_1, ccd(1), START, &mut logger), Ok(()));

        // The leader is owed nothing
        claim_eq!(call_withdraw(&mut host, BIDDER_1, START), Ok(()));
        claim_eq!(call_withdraw(&mut host, STRANGER, START), Ok(()));
        claim_eq!(call_withdraw(&mut host, STRANGER, START), Ok(()));

        let ctx = new_ctx(Address::Contract(OTHER_CONTRACT), START);
        claim_eq!(withdraw(&ctx, &mut host, &mut logger), Ok(()));

        claim!(host.get_transfers().is_empty(), "No transfer should happen");
        claim_eq!(host.state().highest_bid, ccd(1));
    }

    #[concordium_test]
    /// A second withdrawal without a new displacement is a no-op.
    fn test_withdraw_twice() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, BIDDER_1, ccd(1), START, &mut logger), Ok(()));
        claim_eq!(place_bid(&mut host, BIDDER_2, ccd(2), START, &mut logger), Ok(()));

        claim_eq!(call_withdraw(&mut host, BIDDER_1, START), Ok(()));
        claim_eq!(call_withdraw(&mut host, BIDDER_1, START), Ok(()));

        claim_eq!(host.get_transfers(), vec![(BIDDER_1, ccd(1))]);
    }

    #[concordium_test]
    /// A failed refund keeps the balance owed.
    fn test_withdraw_transfer_failed() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, BIDDER_1, ccd(1), START, &mut logger), Ok(()));
        claim_eq!(place_bid(&mut host, BIDDER_2, ccd(2), START, &mut logger), Ok(()));

        host.set_self_balance(Amount::zero());
        expect_error(
            call_withdraw(&mut host, BIDDER_1, START),
            CustomContractError::TransferFailed,
            "Withdrawal should fail without funds",
        );
        claim_eq!(host.state().pending_return(&BIDDER_1), ccd(1));

        host.set_self_balance(ccd(3));
        claim_eq!(call_withdraw(&mut host, BIDDER_1, START), Ok(()));
        claim!(host.transfer_occurred(&BIDDER_1, ccd(1)));
        claim_eq!(host.state().pending_return(&BIDDER_1), Amount::zero());
    }

    #[concordium_test]
    /// Stale pending returns can still be collected after settlement.
    fn test_withdraw_after_end() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, BIDDER_1, ccd(1), START, &mut logger), Ok(()));
        claim_eq!(place_bid(&mut host, BIDDER_2, ccd(2), START, &mut logger), Ok(()));
        claim_eq!(call_end_auction(&mut host, SELLER, END), Ok(()));

        claim_eq!(call_withdraw(&mut host, BIDDER_1, END + 1), Ok(()));
        claim!(host.transfer_occurred(&BIDDER_1, ccd(1)));
        claim_eq!(host.state().escrowed(), Amount::zero());
    }

    #[concordium_test]
    /// Ending before the end time fails and leaves the state untouched.
    fn test_end_auction_too_early() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, BIDDER_1, ccd(1), START, &mut logger), Ok(()));
        let before = host.state().view();

        expect_error(
            call_end_auction(&mut host, SELLER, END - 1),
            CustomContractError::AuctionNotYetEnded,
            "Ending auction should fail before the end time",
        );
        claim_eq!(host.state().view(), before);
        claim!(host.get_transfers().is_empty());
    }

    #[concordium_test]
    /// Settlement pays the seller exactly once.
    fn test_end_auction_twice() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, BIDDER_1, ccd(1), START, &mut logger), Ok(()));
        claim_eq!(call_end_auction(&mut host, STRANGER, END + 10), Ok(()));
        expect_error(
            call_end_auction(&mut host, SELLER, END + 20),
            CustomContractError::AlreadyEnded,
            "Ending auction a second time should fail",
        );

        claim_eq!(host.get_transfers(), vec![(SELLER, ccd(1))]);
        claim!(host.state().ended);
    }

    #[concordium_test]
    /// An auction without bids can be ended and pays nothing.
    fn test_end_auction_without_bids() {
        let mut host = new_host();

        claim_eq!(call_end_auction(&mut host, BIDDER_1, END), Ok(()));
        claim!(host.state().ended);
        claim!(host.get_transfers().is_empty());
    }

    #[concordium_test]
    /// A failed payout leaves the auction unsettled so it can be retried.
    fn test_end_auction_transfer_failed() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, BIDDER_1, ccd(1), START, &mut logger), Ok(()));
        host.set_self_balance(Amount::zero());

        expect_error(
            call_end_auction(&mut host, SELLER, END),
            CustomContractError::TransferFailed,
            "Ending auction should fail when the payout fails",
        );
        claim!(!host.state().ended);

        host.set_self_balance(ccd(1));
        claim_eq!(call_end_auction(&mut host, SELLER, END), Ok(()));
        claim!(host.transfer_occurred(&SELLER, ccd(1)));
        claim!(host.state().ended);
    }

    /// Logger that rejects every further event with `LogError::Full`.
    fn full_logger() -> TestLogger {
        let mut logger = TestLogger::init();
        for _ in 0..64 {
            logger.logs.push(Vec::new());
        }
        logger
    }

    #[concordium_test]
    /// A bid that can not be logged leaves leader, bid and pending returns
    /// unchanged.
    fn test_bid_log_full() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, BIDDER_1, ccd(1), START, &mut logger), Ok(()));
        let before = host.state().view();

        let mut logger = full_logger();
        expect_error(
            place_bid(&mut host, BIDDER_2, ccd(2), START, &mut logger),
            CustomContractError::LogFull,
            "Bid should fail when the log is full",
        );
        claim_eq!(host.state().view(), before);
        claim_eq!(host.state().pending_return(&BIDDER_1), Amount::zero());
    }

    #[concordium_test]
    /// A withdrawal that can not be logged keeps the balance owed.
    fn test_withdraw_log_full() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, BIDDER_1, ccd(1), START, &mut logger), Ok(()));
        claim_eq!(place_bid(&mut host, BIDDER_2, ccd(2), START, &mut logger), Ok(()));

        let ctx = new_ctx(Address::Account(BIDDER_1), START);
        let mut logger = full_logger();
        expect_error(
            withdraw(&ctx, &mut host, &mut logger),
            CustomContractError::LogFull,
            "Withdrawal should fail when the log is full",
        );
        claim_eq!(host.state().pending_return(&BIDDER_1), ccd(1));
        claim!(host.get_transfers().is_empty());
    }

    #[concordium_test]
    /// Settlement that can not be logged leaves the auction unsettled.
    fn test_end_auction_log_full() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, BIDDER_1, ccd(1), START, &mut logger), Ok(()));
        let before = host.state().view();

        let ctx = new_ctx(Address::Account(SELLER), END);
        let mut logger = full_logger();
        expect_error(
            end_auction(&ctx, &mut host, &mut logger),
            CustomContractError::LogFull,
            "Ending auction should fail when the log is full",
        );
        claim_eq!(host.state().view(), before);
        claim!(!host.state().ended);
        claim!(host.get_transfers().is_empty());

        claim_eq!(call_end_auction(&mut host, SELLER, END), Ok(()));
        claim!(host.transfer_occurred(&SELLER, ccd(1)));
    }

    #[concordium_test]
    fn test_events() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, BIDDER_1, ccd(1), START, &mut logger), Ok(()));
        claim_eq!(place_bid(&mut host, BIDDER_2, ccd(2), START, &mut logger), Ok(()));

        let ctx = new_ctx(Address::Account(BIDDER_1), START);
        claim_eq!(withdraw(&ctx, &mut host, &mut logger), Ok(()));

        let ctx = new_ctx(Address::Account(SELLER), END);
        claim_eq!(end_auction(&ctx, &mut host, &mut logger), Ok(()));

        let events: Vec<AuctionEvent> = logger
            .logs
            .iter()
            .map(|log| from_bytes(log).expect_report("Event should parse"))
            .collect();
        claim_eq!(
            events,
            vec![
                AuctionEvent::highest_bid_increased(BIDDER_1, ccd(1)),
                AuctionEvent::highest_bid_increased(BIDDER_2, ccd(2)),
                AuctionEvent::withdrawn(BIDDER_1, ccd(1)),
                AuctionEvent::auction_ended(Some(BIDDER_2), ccd(2)),
            ]
        );
    }

    #[concordium_test]
    fn test_view_functions() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, BIDDER_1, ccd(1), START, &mut logger), Ok(()));
        claim_eq!(place_bid(&mut host, BIDDER_2, ccd(3), START, &mut logger), Ok(()));

        let parameter_bytes = to_bytes(&BIDDER_1);
        let mut ctx = new_ctx(Address::Account(STRANGER), START);
        ctx.set_parameter(&parameter_bytes);
        claim_eq!(view_pending_return(&ctx, &host), Ok(ccd(1)));

        let view = view(&ctx, &host).expect_report("View should succeed");
        claim_eq!(view.highest_bidder, Some(BIDDER_2));
        claim_eq!(view.highest_bid, ccd(3));
        claim_eq!(view.escrowed, ccd(4));

        claim_eq!(auction_state(&ctx, &host), Ok(AuctionState::Open));
        let ctx = new_ctx(Address::Account(STRANGER), END);
        claim_eq!(auction_state(&ctx, &host), Ok(AuctionState::Closed));
    }
}
