pub(crate) mod checkout;
pub(crate) mod messages;
pub(crate) mod plans;
pub(crate) mod session;

#[cfg(target_arch = "wasm32")]
pub(crate) mod flow;
#[cfg(target_arch = "wasm32")]
pub(crate) mod popup;
