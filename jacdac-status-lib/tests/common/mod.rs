//! Common test utilities and shared imports

// Not every test file uses every helper
#[allow(unused_imports)]
pub use jacdac_status_lib::error::Error;
#[allow(unused_imports)]
pub use jacdac_status_lib::{
    CAPTURED_LOG, CAPTURED_LOG_START, FlagLayout, FlagTable, PHYS_STATE_SIZE, decode, replay,
};

/// Two single-bit flags, `A` on bit 0 and `B` on bit 1
#[allow(dead_code)]
pub fn ab_table() -> FlagTable {
    [("A", 0x01), ("B", 0x02)].into_iter().collect()
}

/// Table where `ERR` is the union of `LO`, `TIMEOUT` and `UART`, declared first
#[allow(dead_code)]
pub fn error_mask_table() -> FlagTable {
    [("ERR", 0x00E0), ("LO", 0x0020), ("TIMEOUT", 0x0040), ("UART", 0x0080)]
        .into_iter()
        .collect()
}

/// Visit order of a replay over a ring of `capacity` slots starting at `start`
#[allow(dead_code)]
pub fn visit_order(capacity: usize, start: usize) -> Vec<usize> {
    let buffer: Vec<u16> = (0..capacity as u16).collect();
    let table = ab_table();
    replay(&buffer, start, &table)
        .expect("start within range")
        .map(|record| record.index)
        .collect()
}
