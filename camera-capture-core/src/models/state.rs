use std::path::PathBuf;

/// Session lifecycle state machine.
///
/// State transitions:
/// ```text
/// Closed --open--> Opening --(device bound, session started)--> Opened
/// Opened --close--> Closed
/// ```
///
/// There is no transition from `Opening` back to `Closed` except through a
/// failed open; a failed open is terminal for that attempt and the caller
/// retries `open_camera`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOpenState {
    Closed,
    Opening,
    Opened,
}

impl SessionOpenState {
    pub fn is_opened(&self) -> bool {
        matches!(self, Self::Opened)
    }
}

/// Recording state machine.
///
/// ```text
/// Idle --start (video mode, opened)--> Recording
/// Recording --stop (explicit, timer timeout, or forced by a
///                   rotate / mode toggle / close)--> Idle
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordingState {
    Idle,
    Recording {
        /// Temp file the encoder is writing the movie container to.
        output: PathBuf,
    },
}

impl RecordingState {
    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording { .. })
    }

    /// The active output path, if recording.
    pub fn output(&self) -> Option<&PathBuf> {
        match self {
            Self::Recording { output } => Some(output),
            Self::Idle => None,
        }
    }
}
