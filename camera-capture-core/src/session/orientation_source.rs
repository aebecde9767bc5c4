use parking_lot::Mutex;
use std::sync::Arc;

use crate::models::camera_models::DeviceOrientation;
use crate::models::error::CameraError;
use crate::traits::orientation_sensor::{OrientationCallback, OrientationSensor};

/// Cache over the platform orientation sensor.
///
/// Capture and focus mapping read `latest()` synchronously at the moment
/// they need it; nothing ever waits for a fresh reading. Whatever the
/// sensor last reported is used — that staleness window is accepted.
pub struct OrientationSource {
    sensor: Mutex<Box<dyn OrientationSensor>>,
    latest: Arc<Mutex<DeviceOrientation>>,
}

impl OrientationSource {
    pub fn new(sensor: Box<dyn OrientationSensor>) -> Self {
        Self {
            sensor: Mutex::new(sensor),
            latest: Arc::new(Mutex::new(DeviceOrientation::Unknown)),
        }
    }

    /// Start the sensor subscription. Each reading updates the cache and is
    /// then forwarded to `observer`.
    pub fn start(&self, observer: OrientationCallback) -> Result<(), CameraError> {
        let latest = Arc::clone(&self.latest);
        let callback: OrientationCallback = Arc::new(move |orientation| {
            *latest.lock() = orientation;
            observer(orientation);
        });
        self.sensor.lock().start(callback)
    }

    pub fn stop(&self) {
        self.sensor.lock().stop();
    }

    /// The most recently observed orientation. Non-blocking.
    pub fn latest(&self) -> DeviceOrientation {
        *self.latest.lock()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    struct FakeSensor {
        slot: Arc<Mutex<Option<OrientationCallback>>>,
        stops: Arc<AtomicU32>,
    }

    impl OrientationSensor for FakeSensor {
        fn start(&mut self, callback: OrientationCallback) -> Result<(), CameraError> {
            *self.slot.lock() = Some(callback);
            Ok(())
        }

        fn stop(&mut self) {
            self.stops.fetch_add(1, Ordering::SeqCst);
            *self.slot.lock() = None;
        }
    }

    #[test]
    fn caches_latest_reading_and_forwards_it() {
        let slot = Arc::new(Mutex::new(None));
        let stops = Arc::new(AtomicU32::new(0));
        let source = OrientationSource::new(Box::new(FakeSensor {
            slot: Arc::clone(&slot),
            stops,
        }));

        assert_eq!(source.latest(), DeviceOrientation::Unknown);

        let observed = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&observed);
        source
            .start(Arc::new(move |o| sink.lock().push(o)))
            .unwrap();

        let callback = slot.lock().clone().unwrap();
        callback(DeviceOrientation::LandscapeLeft);
        callback(DeviceOrientation::Portrait);

        assert_eq!(source.latest(), DeviceOrientation::Portrait);
        assert_eq!(
            *observed.lock(),
            vec![DeviceOrientation::LandscapeLeft, DeviceOrientation::Portrait]
        );
    }

    #[test]
    fn stop_reaches_the_sensor() {
        let stops = Arc::new(AtomicU32::new(0));
        let source = OrientationSource::new(Box::new(FakeSensor {
            slot: Arc::new(Mutex::new(None)),
            stops: Arc::clone(&stops),
        }));

        source.stop();
        source.stop();

        assert_eq!(stops.load(Ordering::SeqCst), 2);
    }
}
