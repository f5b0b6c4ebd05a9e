use super::*;

/// Result of a receive function that rejects with one of the custom errors.
pub type ContractResult<A> = Result<A, CustomContractError>;
