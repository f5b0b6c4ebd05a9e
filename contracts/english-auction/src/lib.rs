//! A single-item English auction with an escrow for outbid bidders.
//!
//! # Description
//! An instance is created by the seller with an auction duration in seconds
//! and accepts bids until the end time. Every bid must exceed the highest
//! bid so far. The bid it displaces stays with the contract and is credited
//! to its bidder, who collects it with `withdraw` at any time. Once the end
//! time has passed anybody can call `endAuction`, which pays the winning bid
//! to the seller exactly once.
//!
//! A duration of 300 seconds is a sensible init parameter for most lots.
#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
mod events;
mod external;
mod state;
