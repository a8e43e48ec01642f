multiversx_sc::imports!();

use crate::types::{Proposal, VoteRecord};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Governance configuration ──

    #[view(quorum)]
    #[storage_mapper("quorum")]
    fn quorum(&self) -> SingleValueMapper<BigUint>;

    // ── Proposal store: append-only, ids start at 1 ──

    #[view(proposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    // ── Vote ledger ──

    #[view(hasVoted)]
    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, investor: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("voteRecords")]
    fn vote_records(&self, proposal_id: u64) -> VecMapper<VoteRecord<Self::Api>>;

    // ── Refund ledger: non-zero only for failed proposals, cleared on claim ──

    #[view(getRefund)]
    #[storage_mapper("refunds")]
    fn refunds(&self, proposal_id: u64, investor: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
