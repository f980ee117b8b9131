//! Command-line front ends for decoding JACDAC physical-layer status words.
//!
//! The decoding itself lives in `jacdac-status-lib`; this crate only holds
//! what the `jd-flags` and `jd-status-log` binaries share.

pub mod logging;

pub use jacdac_status_lib as status;
