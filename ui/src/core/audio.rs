//! Optional sound cues. A missing file or a webview that refuses playback is treated
//! as "no audio" and never interrupts a run.

use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoundCue {
    src: Option<String>,
}

impl SoundCue {
    /// Looks for `file` under `asset_dir`; the cue stays silent when it is absent.
    pub fn resolve(asset_dir: &Path, file: &str) -> Self {
        let candidate = asset_dir.join(file);
        if candidate.is_file() {
            Self {
                src: Some(file.to_string()),
            }
        } else {
            tracing::debug!(path = %candidate.display(), "sound cue not found, continuing silently");
            Self::silent()
        }
    }

    pub fn silent() -> Self {
        Self { src: None }
    }

    pub fn is_available(&self) -> bool {
        self.src.is_some()
    }

    pub fn play(&self) {
        let Some(src) = self.src.as_deref() else {
            return;
        };
        let script = format!("new Audio({src:?}).play().catch(() => {{}});");
        let _ = dioxus::prelude::document::eval(&script);
    }
}
