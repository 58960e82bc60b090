//! Scene switching with a loading bar.
//!
//! Loading is polled once per frame. Raw progress counts up to the
//! activation threshold, then the bar shows 100% for a short hold before the
//! target scene is activated.

use crate::core::constants::{LOAD_ACTIVATION_THRESHOLD, LOAD_BRIEF_DELAY};

/// Frames a scene takes to prepare before it can be activated.
const LOAD_STAGES: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneId {
    Menu,
    Game,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadPoll {
    /// Normalized bar fill in `[0, 1)`.
    Loading(f32),
    /// Bar is full, waiting out the brief delay.
    Holding,
    /// Activate the target scene now.
    Ready,
}

#[derive(Debug, Clone)]
pub struct SceneLoader {
    target: SceneId,
    stages_done: u32,
    fill: f32,
    hold_remaining: Option<f64>,
    ready: bool,
}

impl SceneLoader {
    pub fn new(target: SceneId) -> Self {
        log::debug!("Loading scene {:?}", target);
        Self {
            target,
            stages_done: 0,
            fill: 0.0,
            hold_remaining: None,
            ready: false,
        }
    }

    pub fn target(&self) -> SceneId {
        self.target
    }

    /// Prepare one more stage and report where loading stands.
    pub fn poll(&mut self, dt: f64) -> LoadPoll {
        if self.stages_done < LOAD_STAGES {
            self.stages_done += 1;
        }
        let raw = self.stages_done as f32 / LOAD_STAGES as f32 * LOAD_ACTIVATION_THRESHOLD;
        self.poll_progress(raw, dt)
    }

    /// Advance with an externally measured raw progress in `[0, 1]`.
    pub fn poll_progress(&mut self, raw: f32, dt: f64) -> LoadPoll {
        if self.ready {
            return LoadPoll::Ready;
        }

        match self.hold_remaining {
            None if raw < LOAD_ACTIVATION_THRESHOLD => {
                self.fill = (raw / LOAD_ACTIVATION_THRESHOLD).clamp(0.0, 1.0);
                LoadPoll::Loading(self.fill)
            }
            None => {
                self.fill = 1.0;
                self.hold_remaining = Some(LOAD_BRIEF_DELAY);
                LoadPoll::Holding
            }
            Some(remaining) => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.ready = true;
                    LoadPoll::Ready
                } else {
                    self.hold_remaining = Some(remaining);
                    LoadPoll::Holding
                }
            }
        }
    }

    pub fn fill(&self) -> f32 {
        self.fill
    }

    pub fn text(&self) -> String {
        format!("Loading {}%", (self.fill * 100.0).round() as u32)
    }
}
