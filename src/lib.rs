// ============================================================================
// ACTIVITY PORTAL - student / faculty client (Rust + Yew, wasm)
// ============================================================================
// Layers:
// - Models: shapes shared with the backend
// - Services: ApiClient + transport, one file per backend area
// - State: one Resource per remote operation, composed in a Store
// - ViewModels: form drafts and validation
// - Components / Hooks: Yew views bound to the store through a Portal
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod hooks;
pub mod components;
