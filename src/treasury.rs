multiversx_sc::imports!();

use crate::errors::ERR_INVALID_DEPOSIT;

// ============================================================
// Treasury — EGLD custody
//
// The contract balance holds two things: disbursable treasury funds and
// vote bonds. Bonds never join the treasury. They stay locked until their
// voter takes them back: as a refund when the proposal fails, or through
// withdrawBond once it is approved or rejected. `treasury_balance` excludes
// them, so a disbursement can never spend value owed back to voters.
// ============================================================

#[multiversx_sc::module]
pub trait TreasuryModule: crate::events::EventsModule {
    #[payable("EGLD")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_INVALID_DEPOSIT);

        self.deposit_event(&caller, &amount);
    }

    #[view(treasuryBalance)]
    fn treasury_balance(&self) -> BigUint {
        let held = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        let locked = self.locked_bonds().get();
        if held > locked {
            held - locked
        } else {
            BigUint::zero()
        }
    }

    fn lock_bond(&self, proposal_id: u64, voter: &ManagedAddress, bond: &BigUint) {
        self.bond_of(proposal_id, voter).set(bond);
        self.bond_pool(proposal_id).update(|pool| *pool += bond);
        self.locked_bonds().update(|locked| *locked += bond);
    }

    /// Caller must have recorded the proposal as finalized before calling.
    fn disburse(&self, recipient: &ManagedAddress, amount: &BigUint) {
        self.send().direct_egld(recipient, amount);
    }

    /// Pays a bond back out of the locked pool. Caller must have cleared the
    /// voter's entitlement before calling.
    fn return_bond(&self, proposal_id: u64, voter: &ManagedAddress, amount: &BigUint) {
        self.bond_pool(proposal_id).update(|pool| *pool -= amount);
        self.locked_bonds().update(|locked| *locked -= amount);
        self.send().direct_egld(voter, amount);
    }

    #[view(getVoteBond)]
    #[storage_mapper("voteBond")]
    fn vote_bond(&self) -> SingleValueMapper<BigUint>;

    #[view(getLockedBonds)]
    #[storage_mapper("lockedBonds")]
    fn locked_bonds(&self) -> SingleValueMapper<BigUint>;

    /// Bond a voter still holds on a proposal. Cleared on withdrawal, or moved
    /// into the refund ledger when the proposal fails.
    #[view(getBond)]
    #[storage_mapper("bondOf")]
    fn bond_of(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Bonds still held on a proposal. After a failure this is the refund
    /// pool, drawn down by each claim.
    #[view(getRefundPool)]
    #[storage_mapper("bondPool")]
    fn bond_pool(&self, proposal_id: u64) -> SingleValueMapper<BigUint>;
}
