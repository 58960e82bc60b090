//! Sound cues.
//!
//! Game and menu code never play sound directly; they push [`SoundCue`]s and
//! the app drains them once per frame. Playback itself is a terminal bell for
//! the few cues that matter without audio, plus a debug log line.

use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Flap,
    CoinTake,
    SkillStart,
    SkillEnd,
    Death,
    NewHighScore,
    BirdChat,
    UiSelect,
    UiHover,
    UiClick,
    /// One of several purchase jingles.
    Buy(u8),
    /// "Can't do that": insufficient coins, owned item, invalid key.
    Reject,
    KeySelect,
}

/// Number of purchase jingle variants.
pub const BUY_VARIANTS: u8 = 3;

impl SoundCue {
    /// Cues that ring the terminal bell when sound is on.
    pub fn rings_bell(self) -> bool {
        matches!(self, SoundCue::Reject | SoundCue::Death | SoundCue::NewHighScore)
    }
}

/// Per-frame cue queue.
#[derive(Debug, Clone, Default)]
pub struct CueQueue {
    cues: Vec<SoundCue>,
}

impl CueQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }

    pub fn contains(&self, cue: SoundCue) -> bool {
        self.cues.contains(&cue)
    }

    pub fn last(&self) -> Option<SoundCue> {
        self.cues.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn drain(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }
}

/// Output side: volume-gated, writes BEL for bell cues.
pub struct TerminalAudio<W: Write> {
    out: W,
    volume: f32,
}

impl<W: Write> TerminalAudio<W> {
    pub fn new(out: W, volume: f32) -> Self {
        Self { out, volume }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn play(&mut self, cues: &[SoundCue]) -> io::Result<()> {
        if self.volume <= 0.0 {
            return Ok(());
        }
        let mut bell = false;
        for cue in cues {
            log::debug!("cue {:?}", cue);
            bell |= cue.rings_bell();
        }
        if bell {
            self.out.write_all(b"\x07")?;
            self.out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_drain() {
        let mut q = CueQueue::new();
        q.push(SoundCue::Flap);
        q.push(SoundCue::Reject);
        assert!(q.contains(SoundCue::Reject));
        assert_eq!(q.last(), Some(SoundCue::Reject));
        assert_eq!(q.drain(), vec![SoundCue::Flap, SoundCue::Reject]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_bell_only_for_bell_cues() {
        let mut audio = TerminalAudio::new(Vec::new(), 1.0);
        audio.play(&[SoundCue::Flap, SoundCue::CoinTake]).unwrap();
        assert!(audio.out.is_empty());
        audio.play(&[SoundCue::Flap, SoundCue::Reject, SoundCue::Death]).unwrap();
        assert_eq!(audio.out, b"\x07");
    }

    #[test]
    fn test_muted_is_silent() {
        let mut audio = TerminalAudio::new(Vec::new(), 0.0);
        audio.play(&[SoundCue::Reject]).unwrap();
        assert!(audio.out.is_empty());
    }
}
