#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod royalty_bank_proxy;

use errors::*;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait RoyaltyBank {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: updateRewardsMapping
    // Additive credit, reserved for the issuer. The mint fee
    // share arrives attached to the same call, but ledger-only
    // credits with no payment are equally valid — funding and
    // accounting are deliberately separate.
    // ========================================================

    #[payable("*")]
    #[endpoint(updateRewardsMapping)]
    fn update_rewards_mapping(&self, rank: u64, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let issuer = self.caster_nft_address().get();
        require!(!issuer.is_zero() && caller == issuer, ERR_UNAUTHORIZED_ACTION);
        require!(rank > 0, ERR_INVALID_ACTION);

        let payment_token = self.payment_token().get();
        for transfer in self.call_value().all_esdt_transfers().iter() {
            require!(
                transfer.token_identifier == payment_token && transfer.token_nonce == 0,
                ERR_INVALID_ACTION
            );
        }

        self.royalties(rank).update(|r| *r += &amount);

        self.royalty_credited_event(rank, &amount);
    }

    // ========================================================
    // ENDPOINT: claimReward
    // The backend wallet picks the recipient; the whole accrual
    // is paid out and zeroed before the transfer leaves.
    // ========================================================

    #[endpoint(claimReward)]
    fn claim_reward(&self, rank: u64, recipient: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        let server = self.server_wallet().get();
        require!(!server.is_zero() && caller == server, ERR_UNAUTHORIZED_ACTION);
        require!(!recipient.is_zero(), ERR_INVALID_ADDRESS);

        let amount = self.royalties(rank).get();
        self.royalties(rank).clear();

        if amount > 0 {
            let payment_token = self.payment_token().get();
            self.send()
                .direct_esdt(&recipient, &payment_token, 0, &amount);
        }

        self.reward_claimed_event(rank, &recipient, &amount);
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
    #[endpoint(updateCasterNFTAddress)]
    fn update_caster_nft_address(&self, address: ManagedAddress) {
        require!(!address.is_zero(), ERR_INVALID_ADDRESS);
        self.caster_nft_address().set(&address);
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

    #[event("royaltyCredited")]
    fn royalty_credited_event(&self, #[indexed] rank: u64, amount: &BigUint);

    #[event("rewardClaimed")]
    fn reward_claimed_event(
        &self,
        #[indexed] rank: u64,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getPaymentToken)]
    #[storage_mapper("paymentToken")]
    fn payment_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getCasterNFTAddress)]
    #[storage_mapper("casterNFTAddress")]
    fn caster_nft_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getServerWallet)]
    #[storage_mapper("serverWallet")]
    fn server_wallet(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(royalties)]
    #[storage_mapper("royalties")]
    fn royalties(&self, rank: u64) -> SingleValueMapper<BigUint>;
}
