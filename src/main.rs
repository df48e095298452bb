//! Display auto-rotation daemon.
//!
//! Polls the accelerometer input device and rotates the display via
//! `xrandr` whenever the device orientation changes. Exits non-zero on any
//! device failure; restarting is left to the process supervisor.

use autorotate::{Config, EventDevice, OrientationMonitor, Xrandr};

fn main() {
    env_logger::init();

    let config = Config::from_env();

    // xrandr needs a target display; default to the primary one when the
    // environment does not name it.
    if std::env::var_os("DISPLAY").is_none() {
        std::env::set_var("DISPLAY", ":0");
    }

    let device = match EventDevice::open(&config.device_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to open {}: {}", config.device_path, e);
            std::process::exit(1);
        }
    };

    let backend = Xrandr::new(config.settle_delay);
    let mut monitor = OrientationMonitor::new(device, backend, config.poll_interval);

    log::info!(
        "watching {} (poll interval {:?})",
        config.device_path,
        config.poll_interval
    );

    if let Err(e) = monitor.run() {
        eprintln!("Fatal: {}", e);
        std::process::exit(1);
    }
}
