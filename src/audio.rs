use std::io::{self, Write};

use crate::settings::Difficulty;

/// One-shot sound effects.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SoundCue {
    Fire,
    AlienDestroyed,
    ShipHit,
    Quit,
    Easy,
    Medium,
    Hard,
}

impl SoundCue {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => SoundCue::Easy,
            Difficulty::Medium => SoundCue::Medium,
            Difficulty::Hard => SoundCue::Hard,
        }
    }
}

/// Looping background tracks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Music {
    Play,
    Inactive,
}

/// Queued by the game each tick and drained by the frontend.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AudioEvent {
    Cue(SoundCue),
    /// Switch the background loop; `None` stops it.
    Music(Option<Music>),
}

/// Terminal stand-in for a mixer: logs every event, tracks the current loop
/// and optionally rings the bell on impacts.
#[derive(Debug, Default)]
pub struct Jukebox {
    bell: bool,
    music: Option<Music>,
}

impl Jukebox {
    pub fn new(bell: bool) -> Self {
        Self { bell, music: None }
    }

    pub fn music(&self) -> Option<Music> {
        self.music
    }

    pub fn play<W: Write>(&mut self, event: AudioEvent, out: &mut W) -> io::Result<()> {
        match event {
            AudioEvent::Cue(cue) => {
                log::debug!("sound cue {:?}", cue);
                if self.bell && matches!(cue, SoundCue::AlienDestroyed | SoundCue::ShipHit) {
                    out.write_all(b"\x07")?;
                    out.flush()?;
                }
            }
            AudioEvent::Music(track) => {
                if self.music != track {
                    log::debug!("music {:?} -> {:?}", self.music, track);
                    self.music = track;
                }
            }
        }
        Ok(())
    }
}
