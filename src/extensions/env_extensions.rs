use soroban_sdk::storage::Instance;
use soroban_sdk::{panic_with_error, Address, BytesN, Env};

use crate::types::error::RouterError;

const ADMIN_KEY: &str = "admin";

pub trait EnvExtensions {
    fn get_admin(&self) -> Option<Address>;

    fn set_admin(&self, admin: &Address);

    fn get_pool(&self, key: &BytesN<20>) -> Option<Address>;

    fn set_pool(&self, key: &BytesN<20>, pool: &Address);

    fn remove_pool(&self, key: &BytesN<20>);

    fn bump_instance(&self);

    fn panic_if_not_admin(&self);

    fn panic_if_not_initialized(&self);

    fn is_initialized(&self) -> bool;
}

impl EnvExtensions for Env {
    fn is_initialized(&self) -> bool {
        get_instance_storage(&self).has(&ADMIN_KEY)
    }

    fn get_admin(&self) -> Option<Address> {
        get_instance_storage(&self).get(&ADMIN_KEY)
    }

    fn set_admin(&self, admin: &Address) {
        get_instance_storage(&self).set(&ADMIN_KEY, admin);
    }

    fn get_pool(&self, key: &BytesN<20>) -> Option<Address> {
        get_instance_storage(&self).get(key)
    }

    fn set_pool(&self, key: &BytesN<20>, pool: &Address) {
        get_instance_storage(&self).set(key, pool);
    }

    fn remove_pool(&self, key: &BytesN<20>) {
        get_instance_storage(&self).remove(key);
    }

    fn panic_if_not_admin(&self) {
        match self.get_admin() {
            Some(admin) => admin.require_auth(),
            None => panic_with_error!(self, RouterError::Unauthorized),
        }
    }

    fn panic_if_not_initialized(&self) {
        if !self.is_initialized() {
            panic_with_error!(self, RouterError::NotInitialized);
        }
    }

    //extend for 20 days if less than 10 days TTL left
    fn bump_instance(&self) {
        self.storage()
            .instance()
            .extend_ttl(LPH * 24 * 10, LPH * 24 * 20);
    }
}

const LPH: u32 = 720;

fn get_instance_storage(e: &Env) -> Instance {
    e.storage().instance()
}
