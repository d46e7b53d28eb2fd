// Blackbox tests for the rank issuer. The royalty bank and prize
// pool are deployed alongside it so the mint fee split runs against
// the real cross-contract calls.

use multiversx_sc_scenario::imports::*;

use caster_nft::caster_nft_proxy;
use prize_pool::prize_pool_proxy;
use royalty_bank::royalty_bank_proxy;

const OWNER: TestAddress = TestAddress::new("owner");
const USER: TestAddress = TestAddress::new("user");
const TREASURY: TestAddress = TestAddress::new("treasury");

const CASTER_NFT_ADDRESS: TestSCAddress = TestSCAddress::new("caster-nft");
const ROYALTY_BANK_ADDRESS: TestSCAddress = TestSCAddress::new("royalty-bank");
const PRIZE_POOL_ADDRESS: TestSCAddress = TestSCAddress::new("prize-pool");

const CASTER_NFT_CODE: MxscPath = MxscPath::new("output/caster-nft.mxsc.json");
const ROYALTY_BANK_CODE: MxscPath = MxscPath::new("../royalty-bank/output/royalty-bank.mxsc.json");
const PRIZE_POOL_CODE: MxscPath = MxscPath::new("../prize-pool/output/prize-pool.mxsc.json");

const PAYMENT_TOKEN_ID: &str = "CSTR-123456";
const PAYMENT_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new(PAYMENT_TOKEN_ID);
const OTHER_TOKEN_ID: &str = "OTHR-654321";
const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new(OTHER_TOKEN_ID);

const ONE_TOKEN: u64 = 1_000_000_000_000_000_000;

fn tokens(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(ONE_TOKEN)
}

fn payment_token_id() -> TokenIdentifier<StaticApi> {
    TokenIdentifier::from(PAYMENT_TOKEN_ID)
}

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CASTER_NFT_CODE, caster_nft::ContractBuilder);
    blockchain.register_contract(ROYALTY_BANK_CODE, royalty_bank::ContractBuilder);
    blockchain.register_contract(PRIZE_POOL_CODE, prize_pool::ContractBuilder);
    blockchain
}

/// Deploys the issuer, royalty bank and prize pool and wires their
/// address references the way the administrator would.
fn setup() -> ScenarioWorld {
    let mut world = world();

    world.account(OWNER).nonce(1);
    world
        .account(USER)
        .nonce(1)
        .esdt_balance(PAYMENT_TOKEN, tokens(1_000_000_000))
        .esdt_balance(OTHER_TOKEN, tokens(1_000));
    world.account(TREASURY).nonce(1);

    world
        .tx()
        .from(OWNER)
        .typed(royalty_bank_proxy::RoyaltyBankProxy)
        .init()
        .code(ROYALTY_BANK_CODE)
        .new_address(ROYALTY_BANK_ADDRESS)
        .run();
    world
        .tx()
        .from(OWNER)
        .to(ROYALTY_BANK_ADDRESS)
        .typed(royalty_bank_proxy::RoyaltyBankProxy)
        .update_token_contract_address(payment_token_id())
        .run();
    world
        .tx()
        .from(OWNER)
        .to(ROYALTY_BANK_ADDRESS)
        .typed(royalty_bank_proxy::RoyaltyBankProxy)
        .update_caster_nft_address(CASTER_NFT_ADDRESS.to_managed_address())
        .run();
    world
        .tx()
        .from(OWNER)
        .to(ROYALTY_BANK_ADDRESS)
        .typed(royalty_bank_proxy::RoyaltyBankProxy)
        .update_server_wallet(OWNER.to_managed_address())
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(prize_pool_proxy::PrizePoolProxy)
        .init()
        .code(PRIZE_POOL_CODE)
        .new_address(PRIZE_POOL_ADDRESS)
        .run();
    world
        .tx()
        .from(OWNER)
        .to(PRIZE_POOL_ADDRESS)
        .typed(prize_pool_proxy::PrizePoolProxy)
        .update_token_contract_address(payment_token_id())
        .run();
    world
        .tx()
        .from(OWNER)
        .to(PRIZE_POOL_ADDRESS)
        .typed(prize_pool_proxy::PrizePoolProxy)
        .update_server_wallet(OWNER.to_managed_address())
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(caster_nft_proxy::CasterNftProxy)
        .init(payment_token_id())
        .code(CASTER_NFT_CODE)
        .new_address(CASTER_NFT_ADDRESS)
        .run();
    world
        .tx()
        .from(OWNER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .update_treasury_address(TREASURY.to_managed_address())
        .run();
    world
        .tx()
        .from(OWNER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .update_prize_pool_address(PRIZE_POOL_ADDRESS.to_managed_address())
        .run();
    world
        .tx()
        .from(OWNER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .update_royalty_contract_address(ROYALTY_BANK_ADDRESS.to_managed_address())
        .run();

    world
}

fn mint(world: &mut ScenarioWorld, rank: u64, quantity: u64, payment: BigUint<StaticApi>) {
    world
        .tx()
        .from(USER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .mint(rank, quantity)
        .single_esdt(&payment_token_id(), 0u64, &payment)
        .run();
}

fn current_supply(world: &mut ScenarioWorld, rank: u64) -> u64 {
    world
        .query()
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .current_supply(rank)
        .returns(ReturnsResult)
        .run()
}

fn balance_of(world: &mut ScenarioWorld, owner: TestAddress, rank: u64) -> u64 {
    world
        .query()
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .nft_balance(owner.to_managed_address(), rank)
        .returns(ReturnsResult)
        .run()
}

fn mint_price(world: &mut ScenarioWorld, rank: u64, quantity: u64) -> BigUint<StaticApi> {
    world
        .query()
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .get_mint_price_for_token(rank, quantity)
        .returns(ReturnsResult)
        .run()
}

// ============================================================
// Bonding curve
// ============================================================

#[test]
fn curve_reference_points() {
    let mut world = setup();

    assert_eq!(mint_price(&mut world, 1, 1), tokens(80));
    assert_eq!(mint_price(&mut world, 1, 2), tokens(204));
    assert_eq!(mint_price(&mut world, 1, 3), tokens(394));
}

#[test]
fn curve_restarts_after_forfeit() {
    let mut world = setup();

    mint(&mut world, 1, 1, tokens(80));
    assert_eq!(mint_price(&mut world, 1, 1), tokens(124));

    world
        .tx()
        .from(USER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .forfeit_nft(1u64, 1u64)
        .run();

    assert_eq!(mint_price(&mut world, 1, 1), tokens(80));
}

// ============================================================
// Minting
// ============================================================

#[test]
fn mint_credits_balance_and_splits_fee() {
    let mut world = setup();

    mint(&mut world, 1, 1, tokens(80));

    assert_eq!(current_supply(&mut world, 1), 1);
    assert_eq!(balance_of(&mut world, USER, 1), 1);

    // 10% royalty, 20% prize pool, 70% treasury
    world
        .check_account(TREASURY)
        .esdt_balance(PAYMENT_TOKEN, tokens(56));
    world
        .check_account(PRIZE_POOL_ADDRESS)
        .esdt_balance(PAYMENT_TOKEN, tokens(16));
    world
        .check_account(ROYALTY_BANK_ADDRESS)
        .esdt_balance(PAYMENT_TOKEN, tokens(8));

    let accrued = world
        .query()
        .to(ROYALTY_BANK_ADDRESS)
        .typed(royalty_bank_proxy::RoyaltyBankProxy)
        .royalties(1u64)
        .returns(ReturnsResult)
        .run();
    assert_eq!(accrued, tokens(8));
}

#[test]
fn mint_refunds_excess_payment() {
    let mut world = setup();

    mint(&mut world, 1, 1, tokens(1_000));

    world.check_account(USER).esdt_balance(
        PAYMENT_TOKEN,
        tokens(1_000_000_000) - tokens(80),
    );
}

#[test]
fn mint_zero_quantity_fails() {
    let mut world = setup();

    world
        .tx()
        .from(USER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .mint(1u64, 0u64)
        .single_esdt(&payment_token_id(), 0u64, &tokens(80))
        .with_result(ExpectError(4, "invalid action"))
        .run();
}

#[test]
fn mint_underpayment_fails() {
    let mut world = setup();

    world
        .tx()
        .from(USER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .mint(1u64, 1u64)
        .single_esdt(&payment_token_id(), 0u64, &tokens(79))
        .with_result(ExpectError(4, "insufficient allowance"))
        .run();

    // No payment at all surfaces the same way an unapproved
    // ERC-20 pull would.
    world
        .tx()
        .from(USER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .mint(1u64, 1u64)
        .with_result(ExpectError(4, "insufficient allowance"))
        .run();

    assert_eq!(current_supply(&mut world, 1), 0);
}

#[test]
fn mint_with_foreign_token_fails() {
    let mut world = setup();

    world
        .tx()
        .from(USER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .mint(1u64, 1u64)
        .single_esdt(&TokenIdentifier::from(OTHER_TOKEN_ID), 0u64, &tokens(80))
        .with_result(ExpectError(4, "invalid action"))
        .run();
}

#[test]
fn mint_beyond_max_supply_fails() {
    let mut world = setup();

    for _ in 0..500 {
        mint(&mut world, 1, 1, tokens(3_000_000));
    }
    assert_eq!(current_supply(&mut world, 1), 500);

    world
        .tx()
        .from(USER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .mint(1u64, 1u64)
        .single_esdt(&payment_token_id(), 0u64, &tokens(3_000_000))
        .with_result(ExpectError(4, "token supply exceeded"))
        .run();

    assert_eq!(current_supply(&mut world, 1), 500);
    assert_eq!(balance_of(&mut world, USER, 1), 500);
}

#[test]
fn supply_is_tracked_per_rank() {
    let mut world = setup();

    mint(&mut world, 1, 2, tokens(204));
    mint(&mut world, 2, 1, tokens(80));

    assert_eq!(current_supply(&mut world, 1), 2);
    assert_eq!(current_supply(&mut world, 2), 1);
    // Rank 2 starts its own curve from the beginning.
    assert_eq!(mint_price(&mut world, 2, 1), tokens(124));
}

// ============================================================
// Forfeiting
// ============================================================

#[test]
fn forfeit_burns_balance_and_supply() {
    let mut world = setup();

    mint(&mut world, 1, 2, tokens(204));

    world
        .tx()
        .from(USER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .forfeit_nft(1u64, 2u64)
        .run();

    assert_eq!(current_supply(&mut world, 1), 0);
    assert_eq!(balance_of(&mut world, USER, 1), 0);
    // No refund: the user is still out the full mint cost.
    world.check_account(USER).esdt_balance(
        PAYMENT_TOKEN,
        tokens(1_000_000_000) - tokens(204),
    );
}

#[test]
fn forfeit_zero_quantity_fails() {
    let mut world = setup();

    world
        .tx()
        .from(USER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .forfeit_nft(1u64, 0u64)
        .with_result(ExpectError(4, "invalid action"))
        .run();
}

#[test]
fn forfeit_more_than_owned_fails() {
    let mut world = setup();

    world
        .tx()
        .from(USER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .forfeit_nft(1u64, 1u64)
        .with_result(ExpectError(4, "insufficient balance"))
        .run();
}

// ============================================================
// Pause switch
// ============================================================

#[test]
fn pause_gates_mint_only() {
    let mut world = setup();

    mint(&mut world, 1, 1, tokens(80));

    world
        .tx()
        .from(OWNER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .pause()
        .run();

    world
        .tx()
        .from(USER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .mint(1u64, 1u64)
        .single_esdt(&payment_token_id(), 0u64, &tokens(200))
        .with_result(ExpectError(4, "contract is paused"))
        .run();

    // Holders can always exit.
    world
        .tx()
        .from(USER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .forfeit_nft(1u64, 1u64)
        .run();

    world
        .tx()
        .from(OWNER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .unpause()
        .run();

    mint(&mut world, 1, 1, tokens(80));
    assert_eq!(current_supply(&mut world, 1), 1);
}

#[test]
fn pause_is_owner_only() {
    let mut world = setup();

    world
        .tx()
        .from(USER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .pause()
        .with_result(ExpectError(4, "Endpoint can only be called by owner"))
        .run();
}

// ============================================================
// Admin surface
// ============================================================

#[test]
fn address_setters_are_owner_only() {
    let mut world = setup();

    world
        .tx()
        .from(USER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .update_treasury_address(USER.to_managed_address())
        .with_result(ExpectError(4, "Endpoint can only be called by owner"))
        .run();
}

#[test]
fn address_setters_reject_zero_address() {
    let mut world = setup();

    world
        .tx()
        .from(OWNER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .update_treasury_address(ManagedAddress::zero())
        .with_result(ExpectError(4, "invalid address"))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .update_stake_registry_address(ManagedAddress::zero())
        .with_result(ExpectError(4, "invalid address"))
        .run();
}

#[test]
fn address_setters_update_config() {
    let mut world = setup();

    world
        .tx()
        .from(OWNER)
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .update_treasury_address(USER.to_managed_address())
        .run();

    let treasury = world
        .query()
        .to(CASTER_NFT_ADDRESS)
        .typed(caster_nft_proxy::CasterNftProxy)
        .treasury_address()
        .returns(ReturnsResult)
        .run();
    assert_eq!(treasury, USER.to_managed_address());
}
