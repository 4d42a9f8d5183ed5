//! Sound cues
//!
//! Three short clips played through `HtmlAudioElement` on the web. Playback
//! is fire-and-forget: the play promise is awaited on a detached task only
//! to swallow autoplay rejections. Native builds log the cue instead.

use crate::consts::SOUND_VOLUME;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits top or bottom wall
    WallHit,
    /// Point scored
    Score,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [
        SoundEffect::PaddleHit,
        SoundEffect::WallHit,
        SoundEffect::Score,
    ];

    /// Clip location relative to the page
    pub fn asset_path(self) -> &'static str {
        match self {
            SoundEffect::PaddleHit => "./sounds/paddle_hit.wav",
            SoundEffect::WallHit => "./sounds/wall_hit.wav",
            SoundEffect::Score => "./sounds/score.wav",
        }
    }

    /// Playback volume before user settings are applied
    pub fn base_volume(self) -> f32 {
        SOUND_VOLUME
    }

    /// The cue a simulation event should make, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PaddleHit => Some(SoundEffect::PaddleHit),
            GameEvent::WallHit(_) => Some(SoundEffect::WallHit),
            GameEvent::Scored { .. } => Some(SoundEffect::Score),
            GameEvent::Victory { .. } | GameEvent::PhaseChanged { .. } => None,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    clips: Vec<(SoundEffect, web_sys::HtmlAudioElement)>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    /// Create the manager and start loading clips. A clip that cannot be
    /// created is skipped with a warning; the game runs without it.
    pub fn new(settings: &Settings) -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            clips: load_clips(),
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Final playback volume for an effect
    pub fn volume_for(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume * effect.base_volume()
        }
    }

    /// Play the cue for every event that has one, in order
    pub fn react(&self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.volume_for(effect);
        if vol <= 0.0 {
            return;
        }
        self.play_clip(effect, vol);
    }

    #[cfg(target_arch = "wasm32")]
    fn play_clip(&self, effect: SoundEffect, vol: f32) {
        let Some((_, clip)) = self.clips.iter().find(|(e, _)| *e == effect) else {
            return;
        };
        clip.set_volume(vol as f64);
        clip.set_current_time(0.0);
        // Autoplay may be refused before the first user gesture
        match clip.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    log::debug!("{:?} not played: {:?}", effect, e);
                }
            }),
            Err(e) => log::debug!("{:?} not played: {:?}", effect, e),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn play_clip(&self, effect: SoundEffect, vol: f32) {
        log::debug!("Sound {:?} at volume {:.2}", effect, vol);
    }
}

#[cfg(target_arch = "wasm32")]
fn load_clips() -> Vec<(SoundEffect, web_sys::HtmlAudioElement)> {
    SoundEffect::ALL
        .iter()
        .filter_map(|&effect| {
            match web_sys::HtmlAudioElement::new_with_src(effect.asset_path()) {
                Ok(clip) => {
                    clip.set_preload("auto");
                    Some((effect, clip))
                }
                Err(e) => {
                    log::warn!("Failed to load {} - cue disabled: {:?}", effect.asset_path(), e);
                    None
                }
            }
        })
        .collect()
}
