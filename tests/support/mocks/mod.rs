// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod identity;
pub mod lead_magnet_repo;
pub mod time;
pub mod util;

pub use identity::{StaticIdentityProvider, USER_1, USER_1_TOKEN, USER_2, USER_2_TOKEN};
pub use lead_magnet_repo::{InMemoryLeadMagnetStore, SlugBlindReads, StaleReads};
pub use time::fixed_now;
pub use util::FixedClock;
