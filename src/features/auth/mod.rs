pub(crate) mod protocol;
pub(crate) mod store;
pub(crate) mod types;
pub(crate) mod validate;

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
pub(crate) mod guards;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod storage;
