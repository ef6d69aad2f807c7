//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the capability traits
//! defined in sulk-core, written against the sulk-hal pin traits:
//!
//! - Hobby servo on a pulse output ([`servo::PwmServo`])
//! - Relay-switched servo rail ([`relay::RelayRail`])
//! - Toggle switch wake trigger ([`trigger::TriggerInput`])

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod relay;
pub mod servo;
pub mod trigger;

