multiversx_sc::imports!();

use crate::types::FinalizeOutcome;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("propose")]
    fn propose_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] amount: &BigUint,
        #[indexed] recipient: &ManagedAddress,
        creator: &ManagedAddress,
    );

    #[event("vote")]
    fn vote_event(&self, #[indexed] proposal_id: u64, #[indexed] voter: &ManagedAddress);

    #[event("finalize")]
    fn finalize_event(&self, #[indexed] proposal_id: u64, #[indexed] outcome: FinalizeOutcome);

    #[event("refund")]
    fn refund_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("bondReturned")]
    fn bond_returned_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("stake")]
    fn stake_event(&self, #[indexed] investor: &ManagedAddress, amount: &BigUint);

    #[event("unstake")]
    fn unstake_event(&self, #[indexed] investor: &ManagedAddress, amount: &BigUint);

    #[event("deposit")]
    fn deposit_event(&self, #[indexed] depositor: &ManagedAddress, amount: &BigUint);
}
