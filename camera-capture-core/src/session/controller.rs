use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

use crate::models::camera_models::{
    CameraPosition, CaptureMode, FlashMode, PreviewGeometry, StillCaptureSettings, ViewPoint,
};
use crate::models::capture_result::{CaptureMetadata, CapturedImage, RecordedMovie};
use crate::models::config::CameraConfiguration;
use crate::models::error::CameraError;
use crate::models::state::{RecordingState, SessionOpenState};
use crate::processing::{focus_mapping, orientation};
use crate::session::orientation_source::OrientationSource;
use crate::session::preset_policy::SessionPresetPolicy;
use crate::session::recording_timer::{
    self, RecordingTimer, RecordingTimerHandle, TimerTick, DEFAULT_TICK_INTERVAL_SECS,
};
use crate::storage::temp_files;
use crate::traits::camera_control::CameraControl;
use crate::traits::camera_hardware::{CameraDevice, CameraHardware};
use crate::traits::capture_delegate::CameraEventDelegate;
use crate::traits::media_store::MediaStore;
use crate::traits::orientation_sensor::OrientationSensor;
use crate::traits::preview_sink::PreviewSink;

/// Why a recording stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FinishReason {
    Explicit,
    Timeout,
    Reconfigure,
    Close,
}

/// Mutable controller state, single-writer behind `Shared::state`.
struct ControllerState {
    open_state: SessionOpenState,
    position: CameraPosition,
    capture_mode: CaptureMode,
    flash_mode: FlashMode,
    zoom_scale: f32,
    max_zoom_scale: f32,
    recording: RecordingState,
    recorded_secs: f64,
    /// Bumped on every recording start; stale timer ticks are dropped when
    /// their generation no longer matches.
    recording_generation: u64,
    device: Option<Box<dyn CameraDevice>>,
    timer: Option<RecordingTimerHandle>,
    active_preset: Option<String>,
    config: CameraConfiguration,
    policy: SessionPresetPolicy,
}

/// State shared with capture workers and the timer driver.
///
/// Lock order: `session` before `state`; `delegate`/`previews`/`media_store`
/// are leaves. Delegate methods are always invoked with `state` released.
struct Shared {
    /// The session execution context. Held across every configuration
    /// mutation and across an entire still-capture sequence, so
    /// reconfigurations never interleave with each other or an in-flight
    /// capture, and apply in acquisition order.
    session: Mutex<()>,
    state: Mutex<ControllerState>,
    delegate: Mutex<Option<Arc<dyn CameraEventDelegate>>>,
    previews: Mutex<Vec<Arc<dyn PreviewSink>>>,
    media_store: Mutex<Option<Arc<dyn MediaStore>>>,
    orientation: OrientationSource,
}

/// The camera control & capture state machine.
///
/// Owns the capture session's lifecycle and mutable state (flash mode,
/// position, capture mode, zoom, recording), serializes every
/// reconfiguration through one session context, issues capture and record
/// commands to the hardware, and emits results and errors to a delegate.
///
/// ```text
/// [UI] --commands--> [CameraController] --session context--> [CameraDevice]
///                          |   ^                                   |
///                          v   | orientation, timer ticks          v
///                  [CameraEventDelegate] <--artifacts, progress, errors
/// ```
///
/// One long-lived instance is constructed with explicit configuration and
/// injected wherever needed; it also implements [`CameraControl`] for
/// callers that want a trait object.
pub struct CameraController<H: CameraHardware> {
    hardware: H,
    shared: Arc<Shared>,
}

impl<H: CameraHardware> CameraController<H> {
    pub fn new(
        hardware: H,
        sensor: Box<dyn OrientationSensor>,
        config: CameraConfiguration,
    ) -> Self {
        let config = config.normalized();
        let state = ControllerState {
            open_state: SessionOpenState::Closed,
            position: config.initial_position,
            capture_mode: config.initial_capture_mode,
            flash_mode: config.default_flash_mode,
            zoom_scale: 1.0,
            max_zoom_scale: 1.0,
            recording: RecordingState::Idle,
            recorded_secs: 0.0,
            recording_generation: 0,
            device: None,
            timer: None,
            active_preset: None,
            policy: SessionPresetPolicy::new(config.presets.clone()),
            config,
        };

        Self {
            hardware,
            shared: Arc::new(Shared {
                session: Mutex::new(()),
                state: Mutex::new(state),
                delegate: Mutex::new(None),
                previews: Mutex::new(Vec::new()),
                media_store: Mutex::new(None),
                orientation: OrientationSource::new(sensor),
            }),
        }
    }

    pub fn set_delegate(&self, delegate: Arc<dyn CameraEventDelegate>) {
        *self.shared.delegate.lock() = Some(delegate);
    }

    pub fn set_media_store(&self, store: Arc<dyn MediaStore>) {
        *self.shared.media_store.lock() = Some(store);
    }

    /// Replace the configuration. Only allowed while the camera is closed;
    /// numeric fields are normalized rather than rejected.
    pub fn set_configuration(&self, config: CameraConfiguration) -> Result<(), CameraError> {
        let _session = self.shared.session.lock();
        let mut state = self.shared.state.lock();
        if state.open_state != SessionOpenState::Closed {
            return Err(CameraError::InvalidStateTransition(
                "configuration can only be replaced while the camera is closed".into(),
            ));
        }
        let config = config.normalized();
        state.policy = SessionPresetPolicy::new(config.presets.clone());
        state.config = config;
        Ok(())
    }

    /// Open the session: resolve the preset for the current
    /// (position, mode, silent) combination, bind the device, start the
    /// stream and the orientation sensor.
    ///
    /// Fails with `DeviceUnavailable` or `ConfigurationMissing` and leaves
    /// the controller closed and inert. Opening an already-open camera is a
    /// no-op.
    pub fn open_camera(&self) -> Result<(), CameraError> {
        let _session = self.shared.session.lock();
        let mut state = self.shared.state.lock();

        if state.open_state == SessionOpenState::Opened {
            log::debug!("open_camera: already opened");
            return Ok(());
        }

        state.open_state = SessionOpenState::Opening;
        let position = state.position;
        let preset = match state
            .policy
            .resolve(position, state.capture_mode, state.config.silent_shutter_mode)
        {
            Ok(preset) => preset,
            Err(e) => {
                state.open_state = SessionOpenState::Closed;
                return Err(e);
            }
        };

        let device = match self.hardware.device_for(position) {
            Some(device) => device,
            None => {
                state.open_state = SessionOpenState::Closed;
                return Err(CameraError::DeviceUnavailable(position));
            }
        };

        if let Err(e) = self.bind_device(&mut state, device, &preset) {
            state.open_state = SessionOpenState::Closed;
            return Err(e);
        }

        state.open_state = SessionOpenState::Opened;
        drop(state);

        let shared = Arc::clone(&self.shared);
        if let Err(e) = self.shared.orientation.start(Arc::new(move |reading| {
            if let Some(delegate) = shared.delegate() {
                delegate.on_orientation_changed(reading);
            }
        })) {
            log::warn!("orientation sensor failed to start: {}", e);
        }

        log::info!("camera opened ({:?}, preset {})", position, preset);
        Ok(())
    }

    /// Stop the session and release the device. The universal abort:
    /// safe at any time, idempotent when already closed. Flash, zoom and
    /// mode survive so a close/open round trip restores them.
    pub fn close_camera(&self) {
        let _session = self.shared.session.lock();

        let is_closed = self.shared.state.lock().open_state == SessionOpenState::Closed;
        if is_closed {
            return;
        }

        self.shared.finish_recording(None, FinishReason::Close);
        self.shared.orientation.stop();

        let mut state = self.shared.state.lock();
        if let Some(mut device) = state.device.take() {
            device.stop_running();
        }
        state.open_state = SessionOpenState::Closed;
        state.active_preset = None;
        state.recorded_secs = 0.0;
        drop(state);

        log::info!("camera closed");
    }

    /// Advance the flash mode one step in the Auto → Off → On cycle.
    ///
    /// Applied to hardware only when the active device has a flash; the
    /// stored mode still cycles and the delegate is always notified so the
    /// UI stays consistent. Silent no-op while closed.
    pub fn change_flash_mode(&self) {
        let _session = self.shared.session.lock();
        let mut state = self.shared.state.lock();

        if state.open_state != SessionOpenState::Opened {
            log::debug!("change_flash_mode ignored: camera not opened");
            return;
        }

        state.flash_mode = state.flash_mode.next();
        let mode = state.flash_mode;
        let icon = state.config.flash_icons.for_mode(mode).to_owned();

        if let Some(device) = state.device.as_mut() {
            if device.has_flash() {
                if let Err(e) = device.set_flash_mode(mode) {
                    log::warn!("flash mode {:?} not applied: {}", mode, e);
                }
            }
        }
        drop(state);

        if let Some(delegate) = self.shared.delegate() {
            delegate.on_flash_mode_changed(mode, &icon);
        }
    }

    /// Swap front/back and reconfigure the session for the new position.
    ///
    /// An active recording is stopped first — stop, then rotate, never the
    /// reverse. The new device's zoom range is re-read and the current zoom
    /// re-clamped into it. Configuration failure closes the session and
    /// returns the error. Silent no-op while closed.
    pub fn rotate_camera_position(&self) -> Result<(), CameraError> {
        let _session = self.shared.session.lock();

        if self.shared.state.lock().open_state != SessionOpenState::Opened {
            log::debug!("rotate_camera_position ignored: camera not opened");
            return Ok(());
        }

        self.shared.finish_recording(None, FinishReason::Reconfigure);

        let mut state = self.shared.state.lock();
        let new_position = state.position.toggled();
        state.position = new_position;

        let preset = match state.policy.resolve(
            new_position,
            state.capture_mode,
            state.config.silent_shutter_mode,
        ) {
            Ok(preset) => preset,
            Err(e) => return self.abort_to_closed(state, e, "rotate"),
        };

        let device = match self.hardware.device_for(new_position) {
            Some(device) => device,
            None => {
                return self.abort_to_closed(
                    state,
                    CameraError::DeviceUnavailable(new_position),
                    "rotate",
                )
            }
        };

        if let Some(mut old) = state.device.take() {
            old.stop_running();
        }

        if let Err(e) = self.bind_device(&mut state, device, &preset) {
            return self.abort_to_closed(state, e, "rotate");
        }
        drop(state);

        log::info!("camera position rotated to {:?}", new_position);
        Ok(())
    }

    /// Toggle still/video and reconfigure to the preset family for the new
    /// mode on the same device. An active recording is stopped first.
    /// Silent no-op while closed.
    pub fn toggle_camera_mode(&self) -> Result<(), CameraError> {
        let _session = self.shared.session.lock();

        if self.shared.state.lock().open_state != SessionOpenState::Opened {
            log::debug!("toggle_camera_mode ignored: camera not opened");
            return Ok(());
        }

        self.shared.finish_recording(None, FinishReason::Reconfigure);

        let mut state = self.shared.state.lock();
        let new_mode = state.capture_mode.toggled();

        let preset = match state.policy.resolve(
            state.position,
            new_mode,
            state.config.silent_shutter_mode,
        ) {
            Ok(preset) => preset,
            Err(e) => return self.abort_to_closed(state, e, "mode toggle"),
        };

        let position = state.position;
        let applied = match state.device.as_mut() {
            Some(device) => device.apply_preset(&preset),
            None => Err(CameraError::DeviceUnavailable(position)),
        };
        if let Err(e) = applied {
            return self.abort_to_closed(state, e, "mode toggle");
        }

        state.capture_mode = new_mode;
        state.active_preset = Some(preset);
        let proposed = state.config.shutter_icons.for_mode(new_mode).to_owned();
        drop(state);

        if let Some(delegate) = self.shared.delegate() {
            let accepted = delegate.should_change_shutter_icon(&proposed);
            delegate.on_capture_mode_changed(new_mode, accepted.then_some(proposed.as_str()));
        }

        log::info!("capture mode toggled to {:?}", new_mode);
        Ok(())
    }

    /// Map a tap on a preview surface to a point-of-interest focus request.
    ///
    /// Uses the orientation last observed by the sensor; it does not wait
    /// for a fresh reading. Silent no-op while closed; a device refusal is
    /// logged, not surfaced.
    pub fn set_focus_point(&self, point: ViewPoint, geometry: PreviewGeometry) {
        let _session = self.shared.session.lock();
        let mut state = self.shared.state.lock();

        if state.open_state != SessionOpenState::Opened {
            log::debug!("set_focus_point ignored: camera not opened");
            return;
        }

        let focus = focus_mapping::device_focus_point(
            point,
            &geometry,
            self.shared.orientation.latest(),
            state.position,
        );
        if let Some(device) = state.device.as_mut() {
            if let Err(e) = device.focus_at_point(focus) {
                log::warn!("focus request failed: {}", e);
            }
        }
    }

    /// Apply a zoom scale, clamped into `[1.0, max_zoom_scale]`.
    ///
    /// Never errors: out-of-range or non-finite input degrades to the
    /// nearest valid bound. Silent no-op while closed.
    pub fn set_zoom_scale(&self, scale: f32) {
        let _session = self.shared.session.lock();
        let mut state = self.shared.state.lock();

        if state.open_state != SessionOpenState::Opened {
            log::debug!("set_zoom_scale ignored: camera not opened");
            return;
        }

        let clamped = clamp_zoom(scale, state.max_zoom_scale);
        state.zoom_scale = clamped;
        if let Some(device) = state.device.as_mut() {
            if let Err(e) = device.set_zoom_scale(clamped) {
                log::warn!("zoom {} not applied: {}", clamped, e);
            }
        }
    }

    /// Capture a still.
    ///
    /// Valid only while opened in still mode; anything else is reported on
    /// the delegate error channel. The capture runs on a worker serialized
    /// behind the session context: optional flash fire and settle delay,
    /// the snapshot, flash restore, then orientation correction and
    /// delegate delivery off the session context.
    pub fn take_photo(&self) {
        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name("still-capture".into())
            .spawn(move || shared.run_still_capture());
        if let Err(e) = spawned {
            log::error!("failed to spawn still-capture thread: {}", e);
        }
    }

    /// Start or stop a video recording, matching shutter semantics in video
    /// mode.
    ///
    /// Starting requires video mode, an opened camera and an idle recorder;
    /// violations are reported on the delegate error channel. Stopping
    /// resets recorded time and delivers the movie once its container is
    /// finalized, which may outlive this call.
    pub fn toggle_video_recording(&self) {
        let _session = self.shared.session.lock();

        let state = self.shared.state.lock();
        if state.recording.is_recording() {
            drop(state);
            self.shared.finish_recording(None, FinishReason::Explicit);
            return;
        }

        if state.open_state != SessionOpenState::Opened
            || state.capture_mode != CaptureMode::Video
        {
            drop(state);
            self.shared.report_error(CameraError::InvalidStateTransition(
                "starting a recording requires an opened camera in video mode".into(),
            ));
            return;
        }
        drop(state);

        if let Some(delegate) = self.shared.delegate() {
            delegate.on_recording_will_start();
        }

        let mut state = self.shared.state.lock();
        let output = temp_files::temp_movie_path();
        let position = state.position;
        let started = match state.device.as_mut() {
            Some(device) => device.start_movie_recording(&output),
            None => Err(CameraError::DeviceUnavailable(position)),
        };
        if let Err(e) = started {
            drop(state);
            let error = match e {
                CameraError::CaptureFailed(_) => e,
                other => CameraError::CaptureFailed(other.to_string()),
            };
            self.shared.report_error(error);
            return;
        }

        state.recording = RecordingState::Recording { output };
        state.recorded_secs = 0.0;
        state.recording_generation += 1;
        let generation = state.recording_generation;

        let timer = RecordingTimer::new(
            DEFAULT_TICK_INTERVAL_SECS,
            state.config.video_duration_secs,
        );
        let shared = Arc::clone(&self.shared);
        state.timer = Some(recording_timer::spawn_driver(
            timer,
            Arc::new(move |tick| shared.handle_timer_tick(generation, tick)),
        ));
        drop(state);

        log::info!("recording started");
    }

    /// Delete a previously delivered temp movie file. A missing file is
    /// logged, never surfaced; this is a cleanup hint, not a correctness
    /// operation.
    pub fn remove_temp_movie_file(&self, path: &Path) {
        temp_files::remove_temp_movie_file(path);
    }

    /// Register a preview sink. While the camera is open the sink attaches
    /// to the live session immediately, without interrupting sinks that are
    /// already rendering.
    pub fn add_preview_view(&self, sink: Arc<dyn PreviewSink>) {
        let _session = self.shared.session.lock();
        let mut state = self.shared.state.lock();
        let sinks = {
            let mut previews = self.shared.previews.lock();
            previews.push(sink);
            previews.clone()
        };
        if let Some(device) = state.device.as_mut() {
            device.set_preview_sinks(sinks);
        }
    }

    /// Remove a previously registered preview sink, by `Arc` identity.
    pub fn remove_preview_view(&self, sink: &Arc<dyn PreviewSink>) {
        let _session = self.shared.session.lock();
        let mut state = self.shared.state.lock();
        let sinks = {
            let mut previews = self.shared.previews.lock();
            previews.retain(|existing| !Arc::ptr_eq(existing, sink));
            previews.clone()
        };
        if let Some(device) = state.device.as_mut() {
            device.set_preview_sinks(sinks);
        }
    }

    // --- Read accessors ---

    pub fn is_camera_opened(&self) -> bool {
        self.shared.state.lock().open_state.is_opened()
    }

    pub fn position(&self) -> CameraPosition {
        self.shared.state.lock().position
    }

    pub fn capture_mode(&self) -> CaptureMode {
        self.shared.state.lock().capture_mode
    }

    pub fn flash_mode(&self) -> FlashMode {
        self.shared.state.lock().flash_mode
    }

    /// Whether the active device has a flash unit; false while closed.
    pub fn has_flash(&self) -> bool {
        self.shared
            .state
            .lock()
            .device
            .as_ref()
            .map(|device| device.has_flash())
            .unwrap_or(false)
    }

    pub fn zoom_scale(&self) -> f32 {
        self.shared.state.lock().zoom_scale
    }

    pub fn max_zoom_scale(&self) -> f32 {
        self.shared.state.lock().max_zoom_scale
    }

    pub fn is_recording(&self) -> bool {
        self.shared.state.lock().recording.is_recording()
    }

    /// Elapsed recording time; zero while idle.
    pub fn recorded_time_secs(&self) -> f64 {
        self.shared.state.lock().recorded_secs
    }

    /// Remaining recording time. `None` while recording unbounded,
    /// `Some(0.0)` while idle.
    pub fn remain_record_time_secs(&self) -> Option<f64> {
        let state = self.shared.state.lock();
        if !state.recording.is_recording() {
            return Some(0.0);
        }
        let duration = state.config.video_duration_secs;
        if duration > 0.0 {
            Some((duration - state.recorded_secs).max(0.0))
        } else {
            None
        }
    }

    // --- Internal helpers ---

    /// Configure and start a freshly bound device. Caller holds `session`
    /// and `state`; on error the device is dropped unstarted.
    fn bind_device(
        &self,
        state: &mut ControllerState,
        mut device: Box<dyn CameraDevice>,
        preset: &str,
    ) -> Result<(), CameraError> {
        device.apply_preset(preset)?;

        if device.has_flash() {
            if let Err(e) = device.set_flash_mode(state.flash_mode) {
                log::warn!("flash mode {:?} not applied: {}", state.flash_mode, e);
            }
        }

        state.max_zoom_scale = device.max_zoom_scale().max(1.0);
        state.zoom_scale = clamp_zoom(state.zoom_scale, state.max_zoom_scale);
        if let Err(e) = device.set_zoom_scale(state.zoom_scale) {
            log::warn!("zoom {} not applied: {}", state.zoom_scale, e);
        }

        let shared = Arc::clone(&self.shared);
        let device_id = device.id();
        device.set_focus_activity_callback(Arc::new(move |adjusting| {
            if let Some(delegate) = shared.delegate() {
                delegate.on_focus_adjusting_changed(&device_id, adjusting);
            }
        }));

        device.set_preview_sinks(self.shared.previews.lock().clone());

        device.start_running()?;
        state.device = Some(device);
        state.active_preset = Some(preset.to_owned());
        Ok(())
    }

    /// Tear down to the closed state after a failed reconfiguration, so the
    /// caller never observes a half-configured session.
    fn abort_to_closed(
        &self,
        mut state: parking_lot::MutexGuard<'_, ControllerState>,
        error: CameraError,
        context: &str,
    ) -> Result<(), CameraError> {
        if let Some(mut device) = state.device.take() {
            device.stop_running();
        }
        state.open_state = SessionOpenState::Closed;
        state.active_preset = None;
        state.recorded_secs = 0.0;
        drop(state);

        self.shared.orientation.stop();
        log::error!("session reconfiguration failed during {}: {}", context, error);
        Err(error)
    }
}

impl Shared {
    fn delegate(&self) -> Option<Arc<dyn CameraEventDelegate>> {
        self.delegate.lock().clone()
    }

    fn report_error(&self, error: CameraError) {
        log::warn!("{}", error);
        if let Some(delegate) = self.delegate() {
            delegate.on_error(&error);
        }
    }

    /// Stop an active recording. Caller must hold `session`.
    ///
    /// No-op when idle or when `generation` no longer matches (a stale
    /// timer), which is what makes the automatic stop fire at most once.
    /// The movie is delivered by the finalization callback, which may run
    /// synchronously inside this call or later from an encoder thread.
    fn finish_recording(&self, generation: Option<u64>, reason: FinishReason) {
        let mut state = self.state.lock();

        if let Some(generation) = generation {
            if state.recording_generation != generation {
                return;
            }
        }
        if !state.recording.is_recording() {
            return;
        }

        if let Some(timer) = state.timer.take() {
            timer.halt();
        }

        let duration = state.recorded_secs;
        let metadata = CaptureMetadata::new(
            state.position,
            CaptureMode::Video,
            self.orientation.latest(),
            state.active_preset.clone().unwrap_or_default(),
        );
        state.recording = RecordingState::Idle;
        state.recorded_secs = 0.0;

        let delegate = self.delegate();
        if let Some(device) = state.device.as_mut() {
            device.stop_movie_recording(Box::new(move |result| match result {
                Ok(file_path) => {
                    let movie = RecordedMovie {
                        file_path,
                        duration_secs: duration,
                        metadata,
                    };
                    if let Some(delegate) = delegate {
                        delegate.on_movie_recorded(&movie);
                    }
                }
                Err(e) => {
                    log::error!("movie finalization failed: {}", e);
                    if let Some(delegate) = delegate {
                        delegate.on_error(&e);
                    }
                }
            }));
        }
        drop(state);

        log::info!("recording stopped ({:?})", reason);
    }

    /// Timer driver callback. Progress is delivered directly; the expiry
    /// action is handed to the session context rather than executed here.
    fn handle_timer_tick(&self, generation: u64, tick: TimerTick) {
        {
            let mut state = self.state.lock();
            if state.recording_generation != generation || !state.recording.is_recording() {
                return;
            }
            state.recorded_secs = tick.recorded_secs;
        }

        if let Some(delegate) = self.delegate() {
            delegate.on_recording_progress(tick.recorded_secs, tick.remaining_secs);
        }

        if tick.expired {
            let _session = self.session.lock();
            self.finish_recording(Some(generation), FinishReason::Timeout);
        }
    }

    /// The still-capture worker body. Acquires the session context for the
    /// whole hardware sequence, then corrects and delivers off it.
    fn run_still_capture(&self) {
        let session = self.session.lock();
        let mut state = self.state.lock();

        if state.open_state != SessionOpenState::Opened
            || state.capture_mode != CaptureMode::Still
        {
            drop(state);
            drop(session);
            self.report_error(CameraError::InvalidStateTransition(
                "taking a photo requires an opened camera in still mode".into(),
            ));
            return;
        }

        let silent = state.config.silent_shutter_mode;
        let delay = Duration::from_secs_f64(state.config.delay_time_for_flash_secs);
        let settings = StillCaptureSettings {
            jpeg_quality: state.config.jpeg_quality,
        };

        // Fire the flash ahead of the snapshot when the mode calls for it;
        // the prior mode is restored for the live preview after capture.
        let mut restore_mode = None;
        if !silent {
            let prior = state.flash_mode;
            if let Some(device) = state.device.as_mut() {
                if prior != FlashMode::Off
                    && device.has_flash()
                    && device.flash_should_fire(prior)
                {
                    match device.set_flash_mode(FlashMode::On) {
                        Ok(()) => restore_mode = Some(prior),
                        Err(e) => log::warn!("flash fire failed, capturing without: {}", e),
                    }
                }
            }
        }
        drop(state);

        // Exposure settle, with the session context still held so no
        // reconfiguration can slip in mid-shutter.
        if restore_mode.is_some() && !delay.is_zero() {
            thread::sleep(delay);
        }

        let mut state = self.state.lock();
        // Orientation is sampled at capture time, not request time, so a
        // rotation mid-shutter corrects with what the sensor last saw now.
        let captured_orientation = self.orientation.latest();
        let position = state.position;
        let preset = state.active_preset.clone().unwrap_or_default();

        let result = match state.device.as_mut() {
            Some(device) => {
                let result = if silent {
                    device.snapshot_preview_frame()
                } else {
                    device.capture_still(&settings)
                };
                if let Some(prior) = restore_mode {
                    if let Err(e) = device.set_flash_mode(prior) {
                        log::warn!("flash mode {:?} not restored: {}", prior, e);
                    }
                }
                result
            }
            None => Err(CameraError::DeviceUnavailable(position)),
        };
        let auto_save = state.config.auto_save_to_cameraroll;
        drop(state);
        drop(session);

        match result {
            Ok(frame) => {
                let transform = orientation::transform_for(captured_orientation, position);
                let corrected = orientation::correct_frame(&frame, transform);
                let image = CapturedImage {
                    frame: corrected,
                    metadata: CaptureMetadata::new(
                        position,
                        CaptureMode::Still,
                        captured_orientation,
                        preset,
                    ),
                };

                if let Some(delegate) = self.delegate() {
                    delegate.on_image_captured(&image);
                }

                // Persistence strictly after delegate delivery; the delegate
                // sees the image regardless of the store outcome.
                if auto_save {
                    let store = self.media_store.lock().clone();
                    if let Some(store) = store {
                        if let Err(e) = store.save_image(&image) {
                            log::error!("auto-save to camera roll failed: {}", e);
                        }
                    }
                }
            }
            Err(e) => {
                log::error!("still capture failed: {}", e);
                if let Some(delegate) = self.delegate() {
                    delegate.on_error(&e);
                }
            }
        }
    }
}

/// Clamp into `[1.0, max]`; non-finite input degrades to the lower bound.
fn clamp_zoom(scale: f32, max: f32) -> f32 {
    if !scale.is_finite() {
        return 1.0;
    }
    scale.clamp(1.0, max.max(1.0))
}

impl<H: CameraHardware> CameraControl for CameraController<H> {
    fn open_camera(&self) -> Result<(), CameraError> {
        CameraController::open_camera(self)
    }

    fn close_camera(&self) {
        CameraController::close_camera(self)
    }

    fn change_flash_mode(&self) {
        CameraController::change_flash_mode(self)
    }

    fn rotate_camera_position(&self) -> Result<(), CameraError> {
        CameraController::rotate_camera_position(self)
    }

    fn toggle_camera_mode(&self) -> Result<(), CameraError> {
        CameraController::toggle_camera_mode(self)
    }

    fn set_focus_point(&self, point: ViewPoint, geometry: PreviewGeometry) {
        CameraController::set_focus_point(self, point, geometry)
    }

    fn set_zoom_scale(&self, scale: f32) {
        CameraController::set_zoom_scale(self, scale)
    }

    fn take_photo(&self) {
        CameraController::take_photo(self)
    }

    fn toggle_video_recording(&self) {
        CameraController::toggle_video_recording(self)
    }

    fn remove_temp_movie_file(&self, path: &Path) {
        CameraController::remove_temp_movie_file(self, path)
    }

    fn add_preview_view(&self, sink: Arc<dyn PreviewSink>) {
        CameraController::add_preview_view(self, sink)
    }

    fn remove_preview_view(&self, sink: &Arc<dyn PreviewSink>) {
        CameraController::remove_preview_view(self, sink)
    }

    fn is_camera_opened(&self) -> bool {
        CameraController::is_camera_opened(self)
    }

    fn is_recording(&self) -> bool {
        CameraController::is_recording(self)
    }

    fn position(&self) -> CameraPosition {
        CameraController::position(self)
    }

    fn capture_mode(&self) -> CaptureMode {
        CameraController::capture_mode(self)
    }

    fn flash_mode(&self) -> FlashMode {
        CameraController::flash_mode(self)
    }

    fn zoom_scale(&self) -> f32 {
        CameraController::zoom_scale(self)
    }
}
