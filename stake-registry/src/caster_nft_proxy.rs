use multiversx_sc::proxy_imports::*;

pub struct CasterNftProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CasterNftProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CasterNftProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CasterNftProxyMethods { wrapped_tx: tx }
    }
}

pub struct CasterNftProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> CasterNftProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn balance_of<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        owner: Arg0,
        rank: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("balanceOf")
            .argument(&owner)
            .argument(&rank)
            .original_result()
    }

    pub fn transfer_staked_nfts<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedVec<Env::Api, u64>>,
        Arg3: ProxyArg<ManagedVec<Env::Api, u64>>,
    >(
        self,
        from: Arg0,
        to: Arg1,
        ranks: Arg2,
        amounts: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferStakedNFTs")
            .argument(&from)
            .argument(&to)
            .argument(&ranks)
            .argument(&amounts)
            .original_result()
    }
}
