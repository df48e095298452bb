use crate::types::Orientation;
use crate::{AutorotateError, Result};
use std::process::Command;
use std::time::Duration;

/// Applies a decoded orientation to the display subsystem.
pub trait RotationBackend {
    fn apply(&mut self, orientation: Orientation) -> Result<()>;
}

/// Rotation backend shelling out to `xrandr -o <orientation>`.
///
/// After each invocation the backend sleeps for the settle delay so the
/// display server finishes the mode change before the next poll. xrandr
/// needs `DISPLAY` set; the daemon takes care of that at startup.
pub struct Xrandr {
    settle: Duration,
}

impl Xrandr {
    pub fn new(settle: Duration) -> Xrandr {
        Xrandr { settle }
    }
}

impl RotationBackend for Xrandr {
    fn apply(&mut self, orientation: Orientation) -> Result<()> {
        let arg = match orientation.xrandr_arg() {
            Some(arg) => arg,
            None => return Ok(()),
        };

        let status = Command::new("xrandr")
            .args(["-o", arg])
            .status()
            .map_err(|e| AutorotateError::Backend(format!("xrandr -o {}: {}", arg, e)))?;

        // The exit status is informational only.
        if !status.success() {
            log::warn!("xrandr -o {} exited with {}", arg, status);
        }

        std::thread::sleep(self.settle);
        Ok(())
    }
}
