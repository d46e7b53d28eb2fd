#![no_std]

multiversx_sc::imports!();

pub mod caster_nft_proxy;
pub mod errors;
pub mod stake_registry_proxy;
pub mod types;

use errors::*;
use types::StakeRecord;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait StakeRegistry {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: stakeNFTs
    // Caller is unrestricted; the authorization is a backend
    // signature over (owner, nonce). Each (owner, nonce) pair
    // is consumed exactly once.
    // ========================================================

    #[endpoint(stakeNFTs)]
    fn stake_nfts(
        &self,
        owner: ManagedAddress,
        ranks: ManagedVec<u64>,
        amounts: ManagedVec<u64>,
        signature: ManagedBuffer,
        nonce: u32,
    ) -> u64 {
        require!(
            !ranks.is_empty() && ranks.len() == amounts.len(),
            ERR_INVALID_ACTION
        );

        let server = self.server_wallet().get();
        require!(!server.is_zero(), ERR_INVALID_ADDRESS);
        self.verify_stake_signature(&owner, nonce, &signature, &server);
        require!(
            !self.used_nonces(&owner, nonce).get(),
            ERR_SIGNATURE_ALREADY_USED
        );

        let caster_nft = self.caster_nft_address().get();
        require!(!caster_nft.is_zero(), ERR_INVALID_ADDRESS);

        for i in 0..ranks.len() {
            let rank = ranks.get(i);
            let amount = amounts.get(i);
            require!(rank > 0 && amount > 0, ERR_INVALID_ACTION);

            let balance: u64 = self
                .tx()
                .to(&caster_nft)
                .typed(caster_nft_proxy::CasterNftProxy)
                .balance_of(&owner, rank)
                .returns(ReturnsResult)
                .sync_call_readonly();
            require!(balance >= amount, ERR_INSUFFICIENT_BALANCE);
        }

        let stake_id = self.stake_count().get() + 1;
        self.stake_count().set(stake_id);
        self.used_nonces(&owner, nonce).set(true);
        self.stake_records(stake_id).set(&StakeRecord {
            owner: owner.clone(),
            ranks: ranks.clone(),
            amounts: amounts.clone(),
        });

        self.tx()
            .to(&caster_nft)
            .typed(caster_nft_proxy::CasterNftProxy)
            .transfer_staked_nfts(
                &owner,
                &self.blockchain().get_sc_address(),
                ranks.clone(),
                amounts.clone(),
            )
            .sync_call();

        self.stake_event(stake_id, &owner, nonce);

        stake_id
    }

    // ========================================================
    // ENDPOINT: unstake
    // All-or-nothing: the whole batch goes back to the owner
    // and the record is destroyed.
    // ========================================================

    #[endpoint(unstake)]
    fn unstake(&self, stake_id: u64) {
        let caller = self.blockchain().get_caller();
        require!(
            !self.stake_records(stake_id).is_empty(),
            ERR_UNAUTHORIZED_ACTION
        );

        let record = self.stake_records(stake_id).get();
        require!(record.owner == caller, ERR_UNAUTHORIZED_ACTION);

        self.stake_records(stake_id).clear();

        self.tx()
            .to(&self.caster_nft_address().get())
            .typed(caster_nft_proxy::CasterNftProxy)
            .transfer_staked_nfts(
                &self.blockchain().get_sc_address(),
                &record.owner,
                record.ranks.clone(),
                record.amounts.clone(),
            )
            .sync_call();

        self.unstake_event(stake_id, &caller);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getStakedNFTDetails)]
    fn get_staked_nft_details(
        &self,
        stake_id: u64,
    ) -> MultiValue2<ManagedVec<u64>, ManagedVec<u64>> {
        if self.stake_records(stake_id).is_empty() {
            return (ManagedVec::new(), ManagedVec::new()).into();
        }
        let record = self.stake_records(stake_id).get();
        (record.ranks, record.amounts).into()
    }

    #[view(isNonceUsed)]
    fn is_nonce_used(&self, owner: &ManagedAddress, nonce: u32) -> bool {
        self.used_nonces(owner, nonce).get()
    }

    // ========================================================
    // INTERNAL: signature verification
    // The backend signs keccak256(owner_address ++ nonce_be32)
    // with the key behind the server wallet address.
    // ========================================================

    fn verify_stake_signature(
        &self,
        owner: &ManagedAddress,
        nonce: u32,
        signature: &ManagedBuffer,
        server: &ManagedAddress,
    ) {
        let mut message = ManagedBuffer::new();
        message.append(owner.as_managed_buffer());
        message.append(&ManagedBuffer::from(&nonce.to_be_bytes()[..]));
        let digest = self.crypto().keccak256(&message);

        self.crypto().verify_ed25519(
            server.as_managed_buffer(),
            digest.as_managed_buffer(),
            signature,
        );
    }

    // ========================================================
    // Admin configuration surface
    // ========================================================

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

    #[event("stake")]
    fn stake_event(
        &self,
        #[indexed] stake_id: u64,
        #[indexed] owner: &ManagedAddress,
        nonce: u32,
    );

    #[event("unstake")]
    fn unstake_event(&self, #[indexed] stake_id: u64, #[indexed] owner: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getCasterNFTAddress)]
    #[storage_mapper("casterNFTAddress")]
    fn caster_nft_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getServerWallet)]
    #[storage_mapper("serverWallet")]
    fn server_wallet(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getStakeCount)]
    #[storage_mapper("stakeCount")]
    fn stake_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("stakeRecords")]
    fn stake_records(&self, stake_id: u64) -> SingleValueMapper<StakeRecord<Self::Api>>;

    #[storage_mapper("usedNonces")]
    fn used_nonces(&self, owner: &ManagedAddress, nonce: u32) -> SingleValueMapper<bool>;
}
