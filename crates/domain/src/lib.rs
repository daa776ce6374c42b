//! # ventcard-domain
//!
//! Pure domain model for the ventcard ventilation status card.
//!
//! ## Responsibilities
//! - Foundational types: widget identifiers, error conventions, timestamps
//! - Define the **card configuration** supplied once by the host
//! - Define **sensor readings** as exposed by the host's state snapshot
//! - Derive the **sensor key family** of a ventilation unit from the
//!   configured primary key
//! - Define the eight **metrics** shown on the card and their display units
//! - Define **localized labels** and the supported languages
//! - Define **operating modes** and their device-language spellings
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All host boundaries are expressed as traits in the `app` crate (ports).

pub mod config;
pub mod error;
pub mod id;
pub mod key;
pub mod labels;
pub mod metric;
pub mod mode;
pub mod snapshot;
