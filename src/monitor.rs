use crate::device::SampleSource;
use crate::protocol;
use crate::types::Orientation;
use crate::xrandr::RotationBackend;
use crate::Result;
use std::time::Duration;

/// Polls the sample source and applies orientation changes.
///
/// The monitor remembers the last orientation it handed to the backend and
/// only invokes it again when a determinate decode differs from that value.
/// Indeterminate decodes leave all state untouched.
pub struct OrientationMonitor<S, B> {
    source: S,
    backend: B,
    poll_interval: Duration,
    last_decoded: Option<Orientation>,
    last_applied: Option<Orientation>,
}

impl<S: SampleSource, B: RotationBackend> OrientationMonitor<S, B> {
    pub fn new(source: S, backend: B, poll_interval: Duration) -> OrientationMonitor<S, B> {
        OrientationMonitor {
            source,
            backend,
            poll_interval,
            last_decoded: None,
            last_applied: None,
        }
    }

    /// Last successful decode, if any.
    pub fn last_decoded(&self) -> Option<Orientation> {
        self.last_decoded
    }

    /// Last orientation handed to the backend.
    pub fn last_applied(&self) -> Option<Orientation> {
        self.last_applied
    }

    /// Run the poll loop until the source fails.
    ///
    /// Source failures are fatal and propagate to the caller; backend
    /// failures are logged and the loop keeps going.
    pub fn run(&mut self) -> Result<()> {
        loop {
            std::thread::sleep(self.poll_interval);
            self.poll_once()?;
        }
    }

    /// One poll iteration: read a block, decode it, apply on change.
    pub fn poll_once(&mut self) -> Result<()> {
        let block = self.source.read_block()?;
        let current = protocol::decode_block(&block);

        if !current.is_determinate() {
            return Ok(());
        }

        if self.last_applied != Some(current) {
            log::info!("orientation changed to {:?}", current);
            if let Err(e) = self.backend.apply(current) {
                log::warn!("failed to apply {:?}: {}", current, e);
            }
            // The backend's outcome is not consulted; the orientation
            // counts as applied either way.
            self.last_applied = Some(current);
        }
        self.last_decoded = Some(current);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{RawBlock, BLOCK_SAMPLES, RECORDS_PER_BLOCK, SAMPLES_PER_RECORD};
    use crate::AutorotateError;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Build a block whose first packet carries the given X/Y readings.
    fn block_with(x: u16, y: u16) -> RawBlock {
        let tags: [(u16, u16); 4] = [(0, 0), (2, 0), (2, 1), (2, 2)];
        let values = [0, x, y, 0];
        let mut b = [0u16; BLOCK_SAMPLES];
        for i in 0..RECORDS_PER_BLOCK {
            let base = i * SAMPLES_PER_RECORD;
            if i < 4 {
                b[base + 4] = tags[i].0;
                b[base + 5] = tags[i].1;
                b[base + 7] = values[i];
            } else {
                // Junk tag: matches nothing.
                b[base + 4] = 0x9;
                b[base + 5] = 0x9;
            }
        }
        b
    }

    fn normal_block() -> RawBlock {
        block_with(0xFFFF, 0xFFFF)
    }

    fn left_block() -> RawBlock {
        block_with(0x0000, 0x0000)
    }

    fn garbage_block() -> RawBlock {
        block_with(0x1234, 0x5678)
    }

    /// Source that replays a fixed list of blocks, then fails like a dead
    /// device.
    struct ScriptedSource {
        blocks: Vec<RawBlock>,
        next: usize,
    }

    impl ScriptedSource {
        fn new(blocks: Vec<RawBlock>) -> ScriptedSource {
            ScriptedSource { blocks, next: 0 }
        }
    }

    impl SampleSource for ScriptedSource {
        fn read_block(&mut self) -> Result<RawBlock> {
            match self.blocks.get(self.next) {
                Some(block) => {
                    self.next += 1;
                    Ok(*block)
                }
                None => Err(AutorotateError::ShortRead {
                    got: 0,
                    expected: BLOCK_SAMPLES,
                }),
            }
        }
    }

    /// Backend that records every applied orientation.
    struct RecordingBackend {
        applied: Rc<RefCell<Vec<Orientation>>>,
    }

    impl RotationBackend for RecordingBackend {
        fn apply(&mut self, orientation: Orientation) -> Result<()> {
            self.applied.borrow_mut().push(orientation);
            Ok(())
        }
    }

    fn recording_backend() -> (RecordingBackend, Rc<RefCell<Vec<Orientation>>>) {
        let applied = Rc::new(RefCell::new(Vec::new()));
        (
            RecordingBackend {
                applied: applied.clone(),
            },
            applied,
        )
    }

    #[test]
    fn test_applies_only_on_change() {
        let source = ScriptedSource::new(vec![
            normal_block(),
            normal_block(),
            left_block(),
            garbage_block(),
            left_block(),
        ]);
        let (backend, applied) = recording_backend();
        let mut monitor = OrientationMonitor::new(source, backend, Duration::ZERO);

        for _ in 0..5 {
            monitor.poll_once().unwrap();
        }

        assert_eq!(
            *applied.borrow(),
            vec![Orientation::Normal, Orientation::Left]
        );
        assert_eq!(monitor.last_applied(), Some(Orientation::Left));
        assert_eq!(monitor.last_decoded(), Some(Orientation::Left));
    }

    #[test]
    fn test_indeterminate_leaves_state_untouched() {
        let source = ScriptedSource::new(vec![garbage_block()]);
        let (backend, applied) = recording_backend();
        let mut monitor = OrientationMonitor::new(source, backend, Duration::ZERO);

        monitor.poll_once().unwrap();

        assert!(applied.borrow().is_empty());
        assert_eq!(monitor.last_applied(), None);
        assert_eq!(monitor.last_decoded(), None);
    }

    #[test]
    fn test_source_failure_is_fatal() {
        let source = ScriptedSource::new(vec![]);
        let (backend, applied) = recording_backend();
        let mut monitor = OrientationMonitor::new(source, backend, Duration::ZERO);

        let err = monitor.poll_once().unwrap_err();
        assert!(matches!(err, AutorotateError::ShortRead { .. }));
        assert!(applied.borrow().is_empty());
    }

    #[test]
    fn test_run_stops_when_the_source_dies() {
        let source = ScriptedSource::new(vec![normal_block(), left_block()]);
        let (backend, applied) = recording_backend();
        let mut monitor = OrientationMonitor::new(source, backend, Duration::ZERO);

        let err = monitor.run().unwrap_err();
        assert!(matches!(err, AutorotateError::ShortRead { .. }));
        assert_eq!(
            *applied.borrow(),
            vec![Orientation::Normal, Orientation::Left]
        );
    }

    /// Backend that always fails.
    struct FailingBackend;

    impl RotationBackend for FailingBackend {
        fn apply(&mut self, _orientation: Orientation) -> Result<()> {
            Err(AutorotateError::Backend("no display".into()))
        }
    }

    #[test]
    fn test_backend_failure_does_not_stop_the_loop() {
        let source = ScriptedSource::new(vec![normal_block(), normal_block()]);
        let mut monitor = OrientationMonitor::new(source, FailingBackend, Duration::ZERO);

        monitor.poll_once().unwrap();
        // The orientation still counts as applied, so the repeat decode
        // triggers no second attempt.
        assert_eq!(monitor.last_applied(), Some(Orientation::Normal));
        monitor.poll_once().unwrap();
    }
}
