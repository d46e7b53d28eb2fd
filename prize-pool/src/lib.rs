#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod prize_pool_proxy;

use errors::*;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait PrizePool {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: updateWinnerMapping
    // Backend pushes winnings; credits are strictly additive,
    // never overwritten.
    // ========================================================

    #[endpoint(updateWinnerMapping)]
    fn update_winner_mapping(
        &self,
        winners: ManagedVec<ManagedAddress>,
        amounts: ManagedVec<BigUint>,
    ) {
        let caller = self.blockchain().get_caller();
        let server = self.server_wallet().get();
        require!(!server.is_zero() && caller == server, ERR_UNAUTHORIZED_ACTION);
        require!(winners.len() == amounts.len(), ERR_INVALID_PARAMS);

        for i in 0..winners.len() {
            let winner = winners.get(i);
            let amount = amounts.get(i);
            self.winner_mapping(&winner).update(|w| *w += &*amount);
        }

        self.winners_updated_event(winners.len() as u64);
    }

    // ========================================================
    // ENDPOINT: claimWinnings
    // Self-service claim. The ledger saying an amount is owed
    // is not the same as the pool actually holding it; the
    // holdings check fails with its own error.
    // ========================================================

    #[endpoint(claimWinnings)]
    fn claim_winnings(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.winner_mapping(&caller).get();

        let payment_token = self.payment_token().get();
        let pool_balance = self.blockchain().get_sc_balance(
            &EgldOrEsdtTokenIdentifier::esdt(payment_token.clone()),
            0,
        );
        require!(pool_balance >= amount, ERR_INSUFFICIENT_FUNDS);

        self.winner_mapping(&caller).clear();

        if amount > 0 {
            self.send()
                .direct_esdt(&caller, &payment_token, 0, &amount);
        }

        self.winnings_claimed_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: depositFunds
    // Funds the pool: the issuer forwards its mint fee share
    // here, and anyone may top it up.
    // ========================================================

    #[payable("*")]
    #[endpoint(depositFunds)]
    fn deposit_funds(&self) {
        let payment_token = self.payment_token().get();
        for transfer in self.call_value().all_esdt_transfers().iter() {
            require!(
                transfer.token_identifier == payment_token && transfer.token_nonce == 0,
                ERR_INVALID_ACTION
            );
        }
    }

    // ========================================================
    // Admin configuration surface
    // ========================================================

    #[only_owner]
    #[endpoint(updateTokenContractAddress)]
    fn update_token_contract_address(&self, payment_token: TokenIdentifier) {
        require!(payment_token.is_valid_esdt_identifier(), ERR_INVALID_ADDRESS);
        self.payment_token().set(&payment_token);
    }

    #[only_owner]
    #[endpoint(updateServerWallet)]
    fn update_server_wallet(&self, address: ManagedAddress) {
        require!(!address.is_zero(), ERR_INVALID_ADDRESS);
        self.server_wallet().set(&address);
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("winnersUpdated")]
    fn winners_updated_event(&self, #[indexed] count: u64);

    #[event("winningsClaimed")]
    fn winnings_claimed_event(&self, #[indexed] winner: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getPaymentToken)]
    #[storage_mapper("paymentToken")]
    fn payment_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getServerWallet)]
    #[storage_mapper("serverWallet")]
    fn server_wallet(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(winnerMapping)]
    #[storage_mapper("winnerMapping")]
    fn winner_mapping(&self, winner: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
