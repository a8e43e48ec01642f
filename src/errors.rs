// Every error aborts the transaction with user error code 4 and one of these
// messages. Storage writes, transfers and events of the failed call are reverted.

pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal not found";
pub const ERR_INVALID_NAME: &str = "Invalid proposal name";
pub const ERR_INVALID_AMOUNT: &str = "Invalid amount";
pub const ERR_INVALID_RECIPIENT: &str = "Invalid recipient";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_PROPOSAL_FINALIZED: &str = "Proposal finalized";
pub const ERR_ALREADY_FINALIZED: &str = "Already finalized";
pub const ERR_QUORUM_NOT_MET: &str = "Quorum not met";
pub const ERR_PROPOSAL_NOT_FINALIZED: &str = "Proposal not finalized";
/// Covers never-voted, not-failed, zero bond and already-claimed alike.
pub const ERR_NO_REFUND: &str = "No funds to claim or already claimed";
pub const ERR_INVALID_VOTE_BOND: &str = "Invalid vote bond";
pub const ERR_INVALID_DEPOSIT: &str = "Deposit must be positive";
pub const ERR_NO_BOND: &str = "No bond to withdraw";

// ── Staking ──

pub const ERR_INVALID_STAKE: &str = "Invalid stake payment";
pub const ERR_INVALID_UNSTAKE: &str = "Invalid unstake amount";

// ── Deployment configuration ──

pub const ERR_INVALID_TOKEN: &str = "Invalid governance token";
pub const ERR_INVALID_QUORUM: &str = "Invalid quorum";
pub const ERR_INVALID_SUPPLY: &str = "Invalid token supply";
