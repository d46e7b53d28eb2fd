multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Stake Record — one custodied batch of rank/quantity pairs
// ============================================================

/// Created on stake, destroyed on unstake. The order of `ranks`
/// is the caller's order; entries are not deduplicated.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct StakeRecord<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    pub ranks: ManagedVec<M, u64>,
    pub amounts: ManagedVec<M, u64>,
}
