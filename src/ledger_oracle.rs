multiversx_sc::imports!();

use crate::errors::{
    ERR_INVALID_STAKE, ERR_INVALID_SUPPLY, ERR_INVALID_UNSTAKE, ERR_UNAUTHORIZED,
};

/// Voting weight ledger for the governance token.
///
/// Investors stake governance ESDT into the contract; their staked balance is
/// their voting weight. Weight is read from contract storage inside the
/// transaction that consumes it, so the read and the tally write form one
/// atomic unit. Unstaking later does not touch tallies already recorded.
#[multiversx_sc::module]
pub trait LedgerOracleModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: stake
    // ========================================================

    #[payable("*")]
    #[endpoint(stake)]
    fn stake(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.governance_token().get()
                && payment.token_nonce == 0
                && payment.amount > 0u64,
            ERR_INVALID_STAKE
        );

        self.staked(&caller).update(|staked| *staked += &payment.amount);
        self.total_staked().update(|total| *total += &payment.amount);

        self.stake_event(&caller, &payment.amount);
    }

    // ========================================================
    // ENDPOINT: unstake
    // ========================================================

    #[endpoint(unstake)]
    fn unstake(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let staked = self.staked(&caller).get();
        require!(amount > 0u64 && amount <= staked, ERR_INVALID_UNSTAKE);

        self.staked(&caller).set(&(staked - &amount));
        self.total_staked().update(|total| *total -= &amount);

        let token = self.governance_token().get();
        self.send().direct_esdt(&caller, &token, 0, &amount);

        self.unstake_event(&caller, &amount);
    }

    #[view(getVotingWeight)]
    fn voting_weight(&self, investor: &ManagedAddress) -> BigUint {
        self.staked(investor).get()
    }

    #[view(totalSupply)]
    fn total_supply(&self) -> BigUint {
        self.governance_token_supply().get()
    }

    /// Returns the caller's weight, or aborts with `Unauthorized` if it is zero.
    fn require_investor(&self, caller: &ManagedAddress) -> BigUint {
        let weight = self.voting_weight(caller);
        require!(weight > 0u64, ERR_UNAUTHORIZED);
        weight
    }

    /// Owner keeps the sanity bound in step with mints and burns of the token.
    #[only_owner]
    #[endpoint(setGovernanceTokenSupply)]
    fn set_governance_token_supply(&self, supply: BigUint) {
        require!(supply > 0u64, ERR_INVALID_SUPPLY);
        self.governance_token_supply().set(&supply);
    }

    #[view(getGovernanceToken)]
    #[storage_mapper("governanceToken")]
    fn governance_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("governanceTokenSupply")]
    fn governance_token_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("staked")]
    fn staked(&self, investor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getTotalStaked)]
    #[storage_mapper("totalStaked")]
    fn total_staked(&self) -> SingleValueMapper<BigUint>;
}
