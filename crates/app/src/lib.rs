//! # ventcard-app
//!
//! Application layer — the widget use-case and **port definitions**.
//!
//! ## Responsibilities
//! - Define the **`StateView` port** the host implements (driven/outbound
//!   side: a read-only lookup over the host's sensor snapshot)
//! - Provide the **`StatusWidget`** use-case (driving/inbound side:
//!   `configure`, `apply_snapshot`, `layout_size_hint`)
//! - Own the **`CardView`** render target — structure built once, text
//!   slots patched on every render
//! - Provide the **card-type registry** modelling the one-time
//!   registration handshake with the hosting dashboard
//!
//! ## Dependency rule
//! Depends on `ventcard-domain` only. Never imports adapter crates;
//! adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod registry;
pub mod view;
pub mod widget;
