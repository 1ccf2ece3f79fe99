use serde::{Deserialize, Serialize};

/// A short decorative tone. The server only describes it; whoever owns the
/// audio output synthesizes it and lets it die after `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToneSpec {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    pub gain: f32,
}

/// Played on every increment.
pub const CLICK_TONE: ToneSpec = ToneSpec {
    frequency_hz: 800,
    duration_ms: 100,
    gain: 0.1,
};

/// Played on reset.
pub const RESET_TONE: ToneSpec = ToneSpec {
    frequency_hz: 400,
    duration_ms: 300,
    gain: 0.15,
};

/// Which share paths the platform reports as present. Probed once, then
/// resolved into a [`ShareCapability`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ShareProbe {
    pub native_share: bool,
    pub clipboard: bool,
}

/// The share path settled on at construction time. Native share wins over
/// the clipboard fallback when both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareCapability {
    Native,
    Clipboard,
    Unsupported,
}

impl ShareCapability {
    pub fn resolve(probe: ShareProbe) -> Self {
        if probe.native_share {
            Self::Native
        } else if probe.clipboard {
            Self::Clipboard
        } else {
            Self::Unsupported
        }
    }
}

/// Raised by a platform share or clipboard call. Opaque: callers only branch
/// on it, they never report it.
#[derive(Debug)]
pub struct ShareError;

/// The two operations a host platform may expose for sharing text.
pub trait SharePlatform {
    fn native_share(&mut self, text: &str) -> Result<(), ShareError>;
    fn write_clipboard(&mut self, text: &str) -> Result<(), ShareError>;
}

/// What a best-effort share ended up doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShareOutcome {
    Shared,
    Copied { confirmation: String },
    Unavailable,
}

pub const COPIED_CONFIRMATION: &str = "¡Verso copiado al portapapeles!";

/// Best-effort share of `text`. The native path is fire-and-forget: its
/// completion is not awaited and its result is not branched on. The clipboard
/// path confirms only after a successful write. With no capability at all the
/// call degrades to [`ShareOutcome::Unavailable`] without surfacing anything.
pub fn share_with_fallback(
    capability: ShareCapability,
    platform: &mut dyn SharePlatform,
    text: &str,
) -> ShareOutcome {
    match capability {
        ShareCapability::Native => {
            let _ = platform.native_share(text);
            ShareOutcome::Shared
        }
        ShareCapability::Clipboard => match platform.write_clipboard(text) {
            Ok(()) => ShareOutcome::Copied {
                confirmation: COPIED_CONFIRMATION.to_string(),
            },
            Err(ShareError) => ShareOutcome::Unavailable,
        },
        ShareCapability::Unsupported => ShareOutcome::Unavailable,
    }
}
