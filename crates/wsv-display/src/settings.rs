//! Saved display settings.
//!
//! Brightness/contrast windows are user state worth keeping between
//! sessions: a snapshot of every channel's window (and LUT color, for
//! reference) serializes to JSON and can be pushed back onto a matching
//! channel list later. Only modifiable descriptors accept saved windows;
//! fixed derived channels are recreated from their definitions instead.
//!
//! # Example
//!
//! ```rust
//! use wsv_core::{SampleFormat, rgb::pack_rgb};
//! use wsv_display::{ChannelDisplay, DirectChannel, ModifiableChannelDisplay};
//! use wsv_display::settings::DisplaySettings;
//!
//! let mut dapi = DirectChannel::new("DAPI", 0, pack_rgb(0, 0, 255), SampleFormat::U8);
//! dapi.set_max_display(100.0);
//!
//! let saved = DisplaySettings::capture([&dapi as &dyn wsv_display::ChannelDisplay]);
//! let json = serde_json::to_string(&saved).unwrap();
//!
//! let restored: DisplaySettings = serde_json::from_str(&json).unwrap();
//! let mut fresh = DirectChannel::new("DAPI", 0, pack_rgb(0, 0, 255), SampleFormat::U8);
//! let applied = restored.apply_matching([&mut fresh as &mut dyn ModifiableChannelDisplay]);
//! assert_eq!(applied, 1);
//! assert_eq!(fresh.max_display(), 100.0);
//! ```

use crate::channel::{ChannelDisplay, ModifiableChannelDisplay};
use serde::{Deserialize, Serialize};

/// Saved display state of one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSettings {
    /// Channel name, the key used when re-applying.
    pub name: String,
    /// Saved window minimum.
    pub min_display: f32,
    /// Saved window maximum.
    pub max_display: f32,
    /// LUT color at capture time, if any. Informational; colors are fixed
    /// per descriptor and are not written back.
    pub color: Option<u32>,
}

impl ChannelSettings {
    /// Snapshots one channel's current display state.
    pub fn capture(channel: &dyn ChannelDisplay) -> Self {
        Self {
            name: channel.name().to_owned(),
            min_display: channel.min_display(),
            max_display: channel.max_display(),
            color: channel.color(),
        }
    }

    /// Pushes the saved window onto a modifiable channel.
    pub fn apply_to(&self, channel: &mut dyn ModifiableChannelDisplay) {
        // min first so the max setter is not clamped by a stale minimum
        channel.set_min_display(channel.min_allowed());
        channel.set_max_display(self.max_display);
        channel.set_min_display(self.min_display);
    }
}

/// Saved display state of a whole channel list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Per-channel settings, in display order.
    pub channels: Vec<ChannelSettings>,
}

impl DisplaySettings {
    /// Snapshots the current display state of every channel.
    pub fn capture<'a>(channels: impl IntoIterator<Item = &'a dyn ChannelDisplay>) -> Self {
        Self {
            channels: channels.into_iter().map(ChannelSettings::capture).collect(),
        }
    }

    /// Applies saved windows to channels with matching names.
    ///
    /// Channels without a saved entry are left untouched; saved entries
    /// without a matching channel are skipped. Returns how many channels
    /// were updated.
    pub fn apply_matching<'a>(
        &self,
        channels: impl IntoIterator<Item = &'a mut dyn ModifiableChannelDisplay>,
    ) -> usize {
        let mut applied = 0;
        for channel in channels {
            if let Some(saved) = self.channels.iter().find(|s| s.name == channel.name()) {
                saved.apply_to(channel);
                applied += 1;
            }
        }
        applied
    }
}
