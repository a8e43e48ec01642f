#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod ledger_oracle;
pub mod storage;
pub mod treasury;
pub mod treasury_dao_proxy;
pub mod types;

use errors::*;
use types::{FinalizeOutcome, Proposal, ProposalStatus, VoteDirection, VoteRecord};

// ============================================================
// Constants
// ============================================================

/// Longest accepted proposal name, in bytes
const MAX_NAME_LENGTH: usize = 256;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait TreasuryDao:
    ledger_oracle::LedgerOracleModule
    + treasury::TreasuryModule
    + storage::StorageModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        governance_token: TokenIdentifier,
        governance_token_supply: BigUint,
        quorum: BigUint,
        vote_bond: BigUint,
    ) {
        require!(governance_token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(governance_token_supply > 0u64, ERR_INVALID_SUPPLY);
        require!(quorum > 0u64, ERR_INVALID_QUORUM);

        self.governance_token().set(&governance_token);
        self.governance_token_supply().set(&governance_token_supply);
        self.quorum().set(&quorum);
        self.vote_bond().set(&vote_bond);
        self.proposal_count().set(0u64);
        self.locked_bonds().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // Any investor can propose. The supply bound is a sanity
    // check only; funds are re-checked at finalization.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        name: ManagedBuffer,
        amount: BigUint,
        recipient: ManagedAddress,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_investor(&caller);

        require!(
            !name.is_empty() && name.len() <= MAX_NAME_LENGTH,
            ERR_INVALID_NAME
        );
        require!(
            amount > 0u64 && amount <= self.total_supply(),
            ERR_INVALID_AMOUNT
        );
        require!(!recipient.is_zero(), ERR_INVALID_RECIPIENT);

        let proposal_id = self.proposal_count().get() + 1u64;
        let proposal = Proposal {
            id: proposal_id,
            name,
            creator: caller.clone(),
            recipient: recipient.clone(),
            amount: amount.clone(),
            up_votes: BigUint::zero(),
            down_votes: BigUint::zero(),
            status: ProposalStatus::Open,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        self.propose_event(proposal_id, &amount, &recipient, &caller);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // One vote per investor per proposal, weighted by the
    // investor's staked balance at this moment. Carries the
    // configured vote bond in EGLD.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, direction: VoteDirection) {
        let caller = self.blockchain().get_caller();
        let weight = self.require_investor(&caller);

        let mut proposal = self.require_proposal(proposal_id);
        require!(proposal.is_open(), ERR_PROPOSAL_FINALIZED);
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            ERR_ALREADY_VOTED
        );

        let bond = self.call_value().egld_value().clone_value();
        require!(bond == self.vote_bond().get(), ERR_INVALID_VOTE_BOND);

        match direction {
            VoteDirection::Up => proposal.up_votes += &weight,
            VoteDirection::Down => proposal.down_votes += &weight,
        }

        self.has_voted(proposal_id, &caller).set(true);
        self.vote_records(proposal_id).push(&VoteRecord {
            voter: caller.clone(),
            direction,
            weight,
            bond: bond.clone(),
        });
        self.proposals(proposal_id).set(&proposal);

        if bond > 0u64 {
            self.lock_bond(proposal_id, &caller, &bond);
        }

        self.vote_event(proposal_id, &caller);
    }

    // ========================================================
    // ENDPOINT: finalizeProposal
    // Any investor can close a proposal once either tally
    // strictly exceeds quorum. Open → Finalized is one-way.
    // ========================================================

    #[endpoint(finalizeProposal)]
    fn finalize_proposal(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        self.require_investor(&caller);

        let mut proposal = self.require_proposal(proposal_id);
        require!(proposal.is_open(), ERR_ALREADY_FINALIZED);

        let quorum = self.quorum().get();
        let approved = proposal.up_votes > quorum;
        let rejected = proposal.down_votes > quorum;
        require!(approved || rejected, ERR_QUORUM_NOT_MET);

        let outcome = if !approved {
            FinalizeOutcome::Rejected
        } else if self.treasury_balance() >= proposal.amount {
            FinalizeOutcome::Approved
        } else {
            FinalizeOutcome::Failed
        };

        // State is committed before any value leaves the contract
        proposal.status = ProposalStatus::Finalized(outcome);
        self.proposals(proposal_id).set(&proposal);

        match outcome {
            FinalizeOutcome::Approved => self.disburse(&proposal.recipient, &proposal.amount),
            FinalizeOutcome::Rejected => {}
            FinalizeOutcome::Failed => self.open_refunds(proposal_id),
        }

        self.finalize_event(proposal_id, outcome);
    }

    // ========================================================
    // ENDPOINT: claimRefund
    // Returns a voter's bond on a failed proposal, once.
    // ========================================================

    #[endpoint(claimRefund)]
    fn claim_refund(&self, proposal_id: u64) -> BigUint {
        let caller = self.blockchain().get_caller();
        let proposal = self.require_proposal(proposal_id);
        require!(proposal.is_finalized(), ERR_PROPOSAL_NOT_FINALIZED);

        let amount = self.refunds(proposal_id, &caller).get();
        require!(proposal.is_failed() && amount > 0u64, ERR_NO_REFUND);

        self.refunds(proposal_id, &caller).clear();
        self.return_bond(proposal_id, &caller, &amount);

        self.refund_event(proposal_id, &caller, &amount);

        amount
    }

    // ========================================================
    // ENDPOINT: withdrawBond
    // Hands a vote bond back once its proposal is approved or
    // rejected. Failed proposals go through claimRefund.
    // ========================================================

    #[endpoint(withdrawBond)]
    fn withdraw_bond(&self, proposal_id: u64) -> BigUint {
        let caller = self.blockchain().get_caller();
        let proposal = self.require_proposal(proposal_id);
        require!(proposal.is_finalized(), ERR_PROPOSAL_NOT_FINALIZED);

        let amount = self.bond_of(proposal_id, &caller).get();
        require!(amount > 0u64, ERR_NO_BOND);

        self.bond_of(proposal_id, &caller).clear();
        self.return_bond(proposal_id, &caller, &amount);

        self.bond_returned_event(proposal_id, &caller, &amount);

        amount
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    /// Turns every held bond into a refund entitlement. Runs once per
    /// proposal, from the Open → Finalized(Failed) transition.
    fn open_refunds(&self, proposal_id: u64) {
        for record in self.vote_records(proposal_id).iter() {
            if record.bond > 0u64 {
                self.bond_of(proposal_id, &record.voter).clear();
                self.refunds(proposal_id, &record.voter).set(&record.bond);
            }
        }
    }

    /// Ids in `from..from + count`, clamped to existing proposals.
    fn page_range(&self, from: u64, count: u64) -> Option<(u64, u64)> {
        let total = self.proposal_count().get();
        if count == 0 || total == 0 {
            return None;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return None;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);
        Some((start, end))
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if let Some((start, end)) = self.page_range(from, count) {
            for id in start..=end {
                result.push(self.proposals(id).get());
            }
        }
        result
    }

    /// Open proposals among ids `from..from + count`; a page may come back
    /// shorter than `count`.
    #[view(getOpenProposals)]
    fn get_open_proposals(
        &self,
        from: u64,
        count: u64,
    ) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if let Some((start, end)) = self.page_range(from, count) {
            for id in start..=end {
                let proposal = self.proposals(id).get();
                if proposal.is_open() {
                    result.push(proposal);
                }
            }
        }
        result
    }

    #[view(getVoteRecords)]
    fn get_vote_records(&self, proposal_id: u64) -> MultiValueEncoded<VoteRecord<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for record in self.vote_records(proposal_id).iter() {
            result.push(record);
        }
        result
    }
}
