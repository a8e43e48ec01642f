multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Finalize Outcome — how a proposal left the Open state
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum FinalizeOutcome {
    /// Up-votes exceeded quorum and the treasury paid the recipient.
    Approved,
    /// Down-votes exceeded quorum, up-votes did not. No funds moved.
    Rejected,
    /// Up-votes exceeded quorum but the treasury could not cover the amount.
    /// Voters' bonds become claimable refunds.
    Failed,
}

// ============================================================
// Proposal Status — lifecycle states, one-way
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Accepting votes.
    Open,
    /// Terminal. Set exactly once by finalizeProposal.
    Finalized(FinalizeOutcome),
}

// ============================================================
// Proposal — one disbursement request against the treasury
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub name: ManagedBuffer<M>,
    pub creator: ManagedAddress<M>,
    pub recipient: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub up_votes: BigUint<M>,
    pub down_votes: BigUint<M>,
    pub status: ProposalStatus,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_open(&self) -> bool {
        self.status == ProposalStatus::Open
    }

    pub fn is_finalized(&self) -> bool {
        !self.is_open()
    }

    /// `failed` implies `finalized`: there is no Open-and-failed state to encode.
    pub fn is_failed(&self) -> bool {
        self.status == ProposalStatus::Finalized(FinalizeOutcome::Failed)
    }
}

// ============================================================
// Vote Record — weight and bond captured at vote time
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteDirection {
    Up,
    Down,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub direction: VoteDirection,
    pub weight: BigUint<M>,
    /// EGLD the voter committed with the vote; refundable if the proposal fails
    pub bond: BigUint<M>,
}
