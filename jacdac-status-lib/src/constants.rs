// Physical-layer status constants for JACDAC

/// Number of slots in the physical-layer status ring kept by the firmware
pub const PHYS_STATE_SIZE: usize = 128;

/// Slot the captured ring was being written at when it was dumped
pub const CAPTURED_LOG_START: usize = 54;

/// Width of a status word in bits
pub const STATUS_WORD_BITS: u32 = u16::BITS;

/// Status ring captured from a running device, recorded with the
/// [`FlagLayout::Capture`](crate::FlagLayout::Capture) bit assignments.
pub const CAPTURED_LOG: [u16; PHYS_STATE_SIZE] = [
    5140, 5140, 5396, 4372, 4372, 4372, 4116, 5140, 5396, 4372, 4116, 5140, 5140, 5140, 5140, 5140,
    5140, 5140, 5140, 5140, 5140, 5140, 5396, 4372, 4116, 5140, 5396, 4372, 4372, 4116, 5140, 5140,
    5140, 5140, 5140, 5140, 5140, 5396, 4372, 4372, 4372, 4372, 4372, 4116, 5140, 5140, 5140, 5396,
    4372, 4116, 5140, 5396, 4372, 4372, 5140, 5140, 5140, 5140, 5140, 5140, 5396, 4372, 4116, 5140,
    5396, 4372, 4372, 4116, 5140, 5140, 5140, 5140, 5140, 5140, 5140, 5396, 4372, 4372, 4372, 4372,
    4372, 4116, 5140, 5140, 5140, 5396, 4372, 4116, 5140, 5396, 4372, 4372, 4116, 5140, 5396, 4372,
    4372, 4116, 5140, 5140, 5140, 5396, 4372, 4372, 4372, 4116, 5140, 5396, 4372, 4372, 4116, 5140,
    5140, 5140, 5140, 5140, 5140, 5140, 5396, 4372, 4372, 4116, 5140, 5396, 4372, 4372, 4116, 5140,
];
