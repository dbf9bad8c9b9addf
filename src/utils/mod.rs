pub mod leptos_owner;
pub mod notify;
pub mod panic_hook;
