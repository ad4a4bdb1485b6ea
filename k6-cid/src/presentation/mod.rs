pub mod cid_module;

pub use cid_module::{register, register_default, CidModule, HASH_METHOD, MODULE_NAME};
