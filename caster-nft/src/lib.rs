#![no_std]

multiversx_sc::imports!();

pub mod caster_nft_proxy;
pub mod errors;
pub mod prize_pool_proxy;
pub mod royalty_bank_proxy;

use errors::*;

// ============================================================
// Constants
// ============================================================

/// Hard cap per rank. Mints that would breach it fail, never clamp.
const MAX_TOKEN_SUPPLY: u64 = 500;

/// Bonding curve: the marginal price of unit n within a rank is
/// CURVE_SLOPE * n * (n + 1) + CURVE_BASE whole tokens.
/// Unit 1 = 80, unit 2 = 124, unit 3 = 190; cumulative 80 / 204 / 394.
const CURVE_SLOPE: u64 = 11;
const CURVE_BASE: u64 = 58;

/// Payment token uses 18 decimals.
const ONE_TOKEN: u64 = 1_000_000_000_000_000_000;

/// Share of every mint credited to the royalty bank (1000 basis points = 10%)
const ROYALTY_FEE_BPS: u64 = 1_000;

/// Share of every mint forwarded to the prize pool (2000 basis points = 20%)
const PRIZE_POOL_FEE_BPS: u64 = 2_000;

/// Basis points denominator
const BPS_DENOMINATOR: u64 = 10_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait CasterNft {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, payment_token: TokenIdentifier) {
        require!(payment_token.is_valid_esdt_identifier(), ERR_INVALID_ADDRESS);
        self.payment_token().set(&payment_token);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: mint
    // Pays along the bonding curve, splits the fee between the
    // royalty bank, the prize pool and the treasury.
    // ========================================================

    #[payable("*")]
    #[endpoint(mint)]
    fn mint(&self, rank: u64, quantity: u64) {
        require!(!self.paused().get(), ERR_ENFORCED_PAUSE);
        require!(rank > 0 && quantity > 0, ERR_INVALID_ACTION);

        let current = self.current_supply(rank).get();
        require!(
            quantity <= MAX_TOKEN_SUPPLY - current,
            ERR_TOKEN_SUPPLY_EXCEEDED
        );

        let total_cost = self.price_of_units(current + 1, quantity);

        // The attached payment plays the role of the ERC-20 allowance:
        // anything below the total cost fails before state is touched.
        let payment_token = self.payment_token().get();
        let transfers = self.call_value().all_esdt_transfers().clone_value();
        let mut paid = BigUint::zero();
        for transfer in transfers.iter() {
            require!(
                transfer.token_identifier == payment_token && transfer.token_nonce == 0,
                ERR_INVALID_ACTION
            );
            paid += &transfer.amount;
        }
        require!(paid >= total_cost, ERR_INSUFFICIENT_ALLOWANCE);

        let treasury = self.treasury_address().get();
        let prize_pool = self.prize_pool_address().get();
        let royalty_bank = self.royalty_bank_address().get();
        require!(
            !treasury.is_zero() && !prize_pool.is_zero() && !royalty_bank.is_zero(),
            ERR_INVALID_ADDRESS
        );

        // Effects before interactions: a reentrant token call must
        // observe the updated supply and balances.
        let caller = self.blockchain().get_caller();
        self.current_supply(rank).set(current + quantity);
        self.nft_balance(&caller, rank).update(|b| *b += quantity);

        let royalty_share = &total_cost * ROYALTY_FEE_BPS / BPS_DENOMINATOR;
        let prize_share = &total_cost * PRIZE_POOL_FEE_BPS / BPS_DENOMINATOR;
        let treasury_share = &total_cost - &royalty_share - &prize_share;

        if royalty_share > 0 {
            self.tx()
                .to(&royalty_bank)
                .typed(royalty_bank_proxy::RoyaltyBankProxy)
                .update_rewards_mapping(rank, &royalty_share)
                .single_esdt(&payment_token, 0, &royalty_share)
                .sync_call();
        }
        if prize_share > 0 {
            self.tx()
                .to(&prize_pool)
                .typed(prize_pool_proxy::PrizePoolProxy)
                .deposit_funds()
                .single_esdt(&payment_token, 0, &prize_share)
                .sync_call();
        }
        if treasury_share > 0 {
            self.send()
                .direct_esdt(&treasury, &payment_token, 0, &treasury_share);
        }

        let refund = &paid - &total_cost;
        if refund > 0 {
            self.send()
                .direct_esdt(&caller, &payment_token, 0, &refund);
        }

        self.mint_event(&caller, rank, quantity, &total_cost);
    }

    // ========================================================
    // ENDPOINT: forfeitNFT
    // Pure supply-side exit, no refund. Not gated by pause so
    // holders can always leave.
    // ========================================================

    #[endpoint(forfeitNFT)]
    fn forfeit_nft(&self, rank: u64, quantity: u64) {
        require!(rank > 0 && quantity > 0, ERR_INVALID_ACTION);

        let caller = self.blockchain().get_caller();
        let balance = self.nft_balance(&caller, rank).get();
        require!(balance >= quantity, ERR_INSUFFICIENT_BALANCE);

        self.nft_balance(&caller, rank).set(balance - quantity);
        self.current_supply(rank).update(|s| *s -= quantity);

        self.forfeit_event(&caller, rank, quantity);
    }

    // ========================================================
    // ENDPOINT: transferStakedNFTs
    // Custody transfer between ownership balances, reserved for
    // the stake registry. Plays the role of the ERC-1155 batch
    // transfer the staking contract performs on the EVM side.
    // ========================================================

    #[endpoint(transferStakedNFTs)]
    fn transfer_staked_nfts(
        &self,
        from: ManagedAddress,
        to: ManagedAddress,
        ranks: ManagedVec<u64>,
        amounts: ManagedVec<u64>,
    ) {
        let caller = self.blockchain().get_caller();
        let registry = self.stake_registry_address().get();
        require!(
            !registry.is_zero() && caller == registry,
            ERR_UNAUTHORIZED_ACTION
        );
        require!(
            !ranks.is_empty() && ranks.len() == amounts.len(),
            ERR_INVALID_ACTION
        );

        for i in 0..ranks.len() {
            let rank = ranks.get(i);
            let amount = amounts.get(i);
            require!(rank > 0 && amount > 0, ERR_INVALID_ACTION);

            let from_balance = self.nft_balance(&from, rank).get();
            require!(from_balance >= amount, ERR_INSUFFICIENT_BALANCE);

            self.nft_balance(&from, rank).set(from_balance - amount);
            self.nft_balance(&to, rank).update(|b| *b += amount);
        }

        self.custody_transfer_event(&from, &to);
    }

    // ========================================================
    // ENDPOINT: pause / unpause
    // Gates mint only; forfeit stays open.
    // ========================================================

    #[only_owner]
    #[endpoint(pause)]
    fn pause(&self) {
        self.paused().set(true);
    }

    #[only_owner]
    #[endpoint(unpause)]
    fn unpause(&self) {
        self.paused().set(false);
    }

    // ========================================================
    // Admin configuration surface
    // ========================================================

    #[only_owner]
    #[endpoint(updateTreasuryAddress)]
    fn update_treasury_address(&self, address: ManagedAddress) {
        require!(!address.is_zero(), ERR_INVALID_ADDRESS);
        self.treasury_address().set(&address);
    }

    #[only_owner]
    #[endpoint(updatePrizePoolAddress)]
    fn update_prize_pool_address(&self, address: ManagedAddress) {
        require!(!address.is_zero(), ERR_INVALID_ADDRESS);
        self.prize_pool_address().set(&address);
    }

    #[only_owner]
    #[endpoint(updateRoyaltyContractAddress)]
    fn update_royalty_contract_address(&self, address: ManagedAddress) {
        require!(!address.is_zero(), ERR_INVALID_ADDRESS);
        self.royalty_bank_address().set(&address);
    }

    #[only_owner]
    #[endpoint(updateStakeRegistryAddress)]
    fn update_stake_registry_address(&self, address: ManagedAddress) {
        require!(!address.is_zero(), ERR_INVALID_ADDRESS);
        self.stake_registry_address().set(&address);
    }

    #[only_owner]
    #[endpoint(updateTokenContractAddress)]
    fn update_token_contract_address(&self, payment_token: TokenIdentifier) {
        require!(payment_token.is_valid_esdt_identifier(), ERR_INVALID_ADDRESS);
        self.payment_token().set(&payment_token);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Cumulative cost of the next `quantity` units of `rank`,
    /// starting from the current supply. Read-only curve evaluation.
    #[view(getMintPriceForToken)]
    fn get_mint_price_for_token(&self, rank: u64, quantity: u64) -> BigUint {
        if rank == 0 || quantity == 0 {
            return BigUint::zero();
        }
        self.price_of_units(self.current_supply(rank).get() + 1, quantity)
    }

    // ========================================================
    // INTERNAL: bonding curve
    // ========================================================

    /// Sum of marginal prices for `quantity` units starting at `first_unit`.
    fn price_of_units(&self, first_unit: u64, quantity: u64) -> BigUint {
        let mut total = BigUint::zero();
        for unit in first_unit..first_unit + quantity {
            total += self.unit_price(unit);
        }
        total
    }

    fn unit_price(&self, unit: u64) -> BigUint {
        BigUint::from(CURVE_SLOPE * unit * (unit + 1) + CURVE_BASE) * BigUint::from(ONE_TOKEN)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("mint")]
    fn mint_event(
        &self,
        #[indexed] minter: &ManagedAddress,
        #[indexed] rank: u64,
        #[indexed] quantity: u64,
        cost: &BigUint,
    );

    #[event("forfeit")]
    fn forfeit_event(
        &self,
        #[indexed] holder: &ManagedAddress,
        #[indexed] rank: u64,
        quantity: u64,
    );

    #[event("custodyTransfer")]
    fn custody_transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(getPaymentToken)]
    #[storage_mapper("paymentToken")]
    fn payment_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getTreasuryAddress)]
    #[storage_mapper("treasuryAddress")]
    fn treasury_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPrizePoolAddress)]
    #[storage_mapper("prizePoolAddress")]
    fn prize_pool_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getRoyaltyContractAddress)]
    #[storage_mapper("royaltyBankAddress")]
    fn royalty_bank_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getStakeRegistryAddress)]
    #[storage_mapper("stakeRegistryAddress")]
    fn stake_registry_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(isPaused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    // ── Supply and balances ──

    #[view(currentSupply)]
    #[storage_mapper("currentSupply")]
    fn current_supply(&self, rank: u64) -> SingleValueMapper<u64>;

    #[view(balanceOf)]
    #[storage_mapper("nftBalance")]
    fn nft_balance(&self, owner: &ManagedAddress, rank: u64) -> SingleValueMapper<u64>;
}
