//! # autorotate - accelerometer-driven display rotation
//!
//! Reads raw accelerometer samples from a kernel input device, decodes them
//! into a physical orientation, and rotates the display to match via
//! `xrandr`. Provides:
//! - Packet decoding of the accelerometer's 7-record event blocks
//! - A debounced polling loop that only acts on orientation changes
//! - Pluggable sample-source and rotation backends for testing
//!
//! ## Quick Start
//! ```no_run
//! use autorotate::{Config, EventDevice, OrientationMonitor, Xrandr};
//!
//! let config = Config::from_env();
//! let device = EventDevice::open(&config.device_path).unwrap();
//! let backend = Xrandr::new(config.settle_delay);
//!
//! let mut monitor = OrientationMonitor::new(device, backend, config.poll_interval);
//! monitor.run().unwrap();
//! ```

pub mod config;
pub mod device;
pub mod error;
pub mod monitor;
pub mod protocol;
pub mod types;
pub mod xrandr;

pub use config::Config;
pub use device::{EventDevice, SampleSource};
pub use error::AutorotateError;
pub use monitor::OrientationMonitor;
pub use types::Orientation;
pub use xrandr::{RotationBackend, Xrandr};

/// Result type alias for autorotate operations.
pub type Result<T> = std::result::Result<T, AutorotateError>;
