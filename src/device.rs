use crate::protocol::{RawBlock, BLOCK_SAMPLES};
use crate::{AutorotateError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default kernel input device carrying the accelerometer event stream.
pub const DEFAULT_DEVICE_PATH: &str = "/dev/input/event3";

/// A source of fixed-size sample blocks.
///
/// One call reads exactly one block, blocking until the device has produced
/// it. Anything less than a full block is an error; there is no
/// partial-read recovery and no reconnect.
pub trait SampleSource {
    fn read_block(&mut self) -> Result<RawBlock>;
}

/// Sample source backed by a kernel input-device file.
pub struct EventDevice {
    file: File,
}

impl EventDevice {
    /// Open the input device at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<EventDevice> {
        let file = File::open(path.as_ref())?;
        log::info!("opened input device {}", path.as_ref().display());
        Ok(EventDevice { file })
    }
}

impl SampleSource for EventDevice {
    fn read_block(&mut self) -> Result<RawBlock> {
        read_block_from(&mut self.file)
    }
}

/// Read one block of native-endian samples from `reader`.
///
/// The kernel delivers whole event records, so a blocking read either
/// fills the block or signals a dead device.
fn read_block_from<R: Read>(reader: &mut R) -> Result<RawBlock> {
    let mut bytes = [0u8; BLOCK_SAMPLES * 2];
    let mut filled = 0;
    while filled < bytes.len() {
        let n = reader.read(&mut bytes[filled..])?;
        if n == 0 {
            return Err(AutorotateError::ShortRead {
                got: filled / 2,
                expected: BLOCK_SAMPLES,
            });
        }
        filled += n;
    }

    let mut block = [0u16; BLOCK_SAMPLES];
    for (sample, pair) in block.iter_mut().zip(bytes.chunks_exact(2)) {
        *sample = u16::from_ne_bytes([pair[0], pair[1]]);
    }
    Ok(block)
}
