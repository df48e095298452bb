use crate::types::Orientation;

// -- Block geometry --
pub const SAMPLES_PER_RECORD: usize = 8;
pub const RECORDS_PER_BLOCK: usize = 7;
pub const BLOCK_SAMPLES: usize = SAMPLES_PER_RECORD * RECORDS_PER_BLOCK;

/// One fixed-size read unit from the input device: 7 sub-records of
/// 8 native-endian samples each. Reading 7 at a time guarantees at least
/// one complete boundary/X/Y/Z group per block.
pub type RawBlock = [u16; BLOCK_SAMPLES];

// -- Sub-record field offsets --
const TAG_LO: usize = 4;
const TAG_HI: usize = 5;
const VALUE: usize = 7;

// -- Tag pairs identifying a sub-record's role --
const TAG_BOUNDARY: (u16, u16) = (0x0, 0x0);
const TAG_AXIS_X: (u16, u16) = (0x2, 0x0);
const TAG_AXIS_Y: (u16, u16) = (0x2, 0x1);
const TAG_AXIS_Z: (u16, u16) = (0x2, 0x2);

// -- Axis extremes consulted by the classification table --
const AXIS_MIN: u16 = 0x0000;
const AXIS_MAX: u16 = 0xFFFF;

/// Decoder progress within one block scan. Created fresh per block, never
/// carried across polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    SeekStart,
    WantX,
    WantY,
    WantZ,
}

/// Extract the first complete accelerometer packet from a block and
/// classify it.
///
/// Sub-record layout (8 samples):
/// - `[4..=5]`: tag pair; (0,0) marks a packet boundary, (2,0)/(2,1)/(2,2)
///   carry the X/Y/Z axis readings
/// - `[7]`: axis value
///
/// The scan walks the 7 sub-records once, left to right. A tag mismatch
/// abandons the current packet attempt and resumes boundary seeking at the
/// next sub-record; the mismatching record itself is consumed, so every
/// record is examined at most once. The scan stops at the first fully
/// decoded packet; if none completes, the result is `Indeterminate`.
pub fn decode_block(block: &RawBlock) -> Orientation {
    let mut state = DecodeState::SeekStart;
    let mut x = 0u16;
    let mut y = 0u16;

    for record in block.chunks_exact(SAMPLES_PER_RECORD) {
        let tag = (record[TAG_LO], record[TAG_HI]);
        state = match state {
            DecodeState::SeekStart => {
                if tag == TAG_BOUNDARY {
                    x = 0;
                    y = 0;
                    DecodeState::WantX
                } else {
                    DecodeState::SeekStart
                }
            }
            DecodeState::WantX => {
                if tag == TAG_AXIS_X {
                    x = record[VALUE];
                    DecodeState::WantY
                } else {
                    log::debug!("expected X tag {:?}, got {:?}", TAG_AXIS_X, tag);
                    DecodeState::SeekStart
                }
            }
            DecodeState::WantY => {
                if tag == TAG_AXIS_Y {
                    y = record[VALUE];
                    DecodeState::WantZ
                } else {
                    log::debug!("expected Y tag {:?}, got {:?}", TAG_AXIS_Y, tag);
                    DecodeState::SeekStart
                }
            }
            DecodeState::WantZ => {
                if tag == TAG_AXIS_Z {
                    let z = record[VALUE];
                    log::trace!("packet complete: x={:04x} y={:04x} z={:04x}", x, y, z);
                    return classify(x, y);
                }
                log::debug!("expected Z tag {:?}, got {:?}", TAG_AXIS_Z, tag);
                DecodeState::SeekStart
            }
        };
    }

    log::debug!("no complete packet in block");
    Orientation::Indeterminate
}

/// Map a completed packet's X and Y readings to an orientation.
///
/// Gravity saturates an aligned axis at 0x0000 or 0xFFFF:
/// - Y=0xFFFF with X at either extreme: upright
/// - X=0x0000, Y=0x0000: rotated left
/// - X=0xFFFF, Y=0x0000: rotated right
///
/// Z is not consulted. No reachable pair maps to `Inverted`; any reading
/// off the table is `Indeterminate`.
fn classify(x: u16, y: u16) -> Orientation {
    if y == AXIS_MAX && (x == AXIS_MAX || x == AXIS_MIN) {
        Orientation::Normal
    } else if x == AXIS_MIN && y == AXIS_MIN {
        Orientation::Left
    } else if x == AXIS_MAX && y == AXIS_MIN {
        Orientation::Right
    } else {
        log::debug!("unrecognized orientation: x={:04x} y={:04x}", x, y);
        Orientation::Indeterminate
    }
}
