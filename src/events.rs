use soroban_sdk::{Address, BytesN, Env, Symbol};

#[derive(Clone)]
pub(crate) struct Events(Env);

impl Events {
    #[inline(always)]
    pub(crate) fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub(crate) fn new(env: &Env) -> Events {
        Events(env.clone())
    }
}

// Events published by the router.
// Topics carry the event name and the indexed addresses, data carries amounts.
pub(crate) trait RouterEvents {
    fn register_pool(&self, key: BytesN<20>, pool: Address);

    fn unregister_pool(&self, key: BytesN<20>, pool: Address);

    fn hop(&self, pool: Address, to: Address, amount_in: i128, amount_out: i128);

    fn route(
        &self,
        trader: Address,
        token_in: Address,
        amount_in: i128,
        amount_out: i128,
        hops: u32,
    );
}

impl RouterEvents for Events {
    fn register_pool(&self, key: BytesN<20>, pool: Address) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "register_pool"), pool), key);
    }

    fn unregister_pool(&self, key: BytesN<20>, pool: Address) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "unregister_pool"), pool), key);
    }

    fn hop(&self, pool: Address, to: Address, amount_in: i128, amount_out: i128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "hop"), pool, to),
            (amount_in, amount_out),
        );
    }

    fn route(
        &self,
        trader: Address,
        token_in: Address,
        amount_in: i128,
        amount_out: i128,
        hops: u32,
    ) {
        self.env().events().publish(
            (Symbol::new(self.env(), "route"), trader, token_in),
            (amount_in, amount_out, hops),
        );
    }
}
