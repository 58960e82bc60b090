//! One running round: spawn loops, score, collisions and the death flow.

use super::{GameMenuAction, GameTask};
use crate::audio::{CueQueue, SoundCue};
use crate::core::constants::{
    BIRD_POOL_SIZE, BIRD_SPAWN_CHANCE, BIRD_SPAWN_INTERVAL, COIN_POOL_SIZE, COIN_RADIUS,
    DAY_NIGHT_CYCLE_INTERVAL, DEATH_MENU_DELAY, FPS_HUD_INTERVAL, OBSTACLE_POOL_SIZE,
    SCORE_GAIN_INTERVAL,
};
use crate::core::{
    coin_spawn_threshold, passes, percent_chance, roll_percent, DayNightCycle, DifficultyPreset,
    FpsCounter, Scheduler, TimerHandle,
};
use crate::entities::{Bird, Coin, MoveDirection, Movable, Obstacle, Pool, Recycler};
use crate::player::{Player, PlayerEvent};
use crate::progress::ProgressState;
use rand::Rng;

pub struct GameSession {
    progress: ProgressState,
    preset: DifficultyPreset,
    pub player: Player,
    pub obstacles: Pool<Obstacle>,
    pub coins: Pool<Coin>,
    pub birds: Pool<Bird>,
    recycler: Recycler,
    scheduler: Scheduler<GameTask>,
    /// Spawn, day/night and score loops; cancelled on death.
    round_loops: Vec<TimerHandle>,
    reveal_menu: Option<TimerHandle>,
    pub day_night: DayNightCycle,
    pub fps: FpsCounter,
    pub score: u32,
    pub coins_this_round: u32,
    new_high_score: bool,
    menu_visible: bool,
    death_summary: Option<String>,
    save_requested: bool,
    pub cues: CueQueue,
}

impl GameSession {
    /// Build the scene for the difficulty stored in `progress` and start the round.
    pub fn new(progress: ProgressState) -> Self {
        let preset = progress.options.difficulty.preset();
        let obstacle_config = preset.obstacle_config();
        let coin_config = preset.coin_config();
        let bird_config = preset.bird_config();
        let player = Player::new(progress.skill2_level, progress.options.flap_key.clone());

        log::info!(
            "Round started on {} (skill1 {}, skill2 {})",
            progress.options.difficulty.name(),
            progress.skill1_level,
            progress.skill2_level
        );

        let mut session = Self {
            progress,
            preset,
            player,
            obstacles: Pool::with_capacity(OBSTACLE_POOL_SIZE, || Obstacle::new(obstacle_config)),
            coins: Pool::with_capacity(COIN_POOL_SIZE, || Coin::new(coin_config)),
            birds: Pool::with_capacity(BIRD_POOL_SIZE, || Bird::new(bird_config)),
            recycler: Recycler::default(),
            scheduler: Scheduler::new(),
            round_loops: Vec::new(),
            reveal_menu: None,
            day_night: DayNightCycle::new(),
            fps: FpsCounter::new(),
            score: 0,
            coins_this_round: 0,
            new_high_score: false,
            menu_visible: false,
            death_summary: None,
            save_requested: false,
            cues: CueQueue::new(),
        };

        if session.progress.options.show_fps {
            session
                .scheduler
                .every(0.0, FPS_HUD_INTERVAL, GameTask::FpsHud);
        }
        session.start_loops();
        session
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    pub fn preset(&self) -> DifficultyPreset {
        self.preset
    }

    pub fn scheduler(&self) -> &Scheduler<GameTask> {
        &self.scheduler
    }

    pub fn is_menu_visible(&self) -> bool {
        self.menu_visible
    }

    pub fn death_summary(&self) -> Option<&str> {
        self.death_summary.as_deref()
    }

    pub fn is_new_high_score(&self) -> bool {
        self.new_high_score
    }

    /// `current / high`, as shown on the score HUD.
    pub fn score_text(&self) -> String {
        format!("{} / {}", self.score, self.progress.high_score)
    }

    /// True once after every change that should be written to disk.
    pub fn take_save_request(&mut self) -> bool {
        std::mem::take(&mut self.save_requested)
    }

    fn start_loops(&mut self) {
        let delay = self.preset.spawn_delay;
        self.round_loops = vec![
            self.scheduler.every(delay, delay, GameTask::SpawnObstacle),
            // Same delay as obstacles; coins spawn further right so they land between pipes.
            self.scheduler.every(delay, delay, GameTask::SpawnCoin),
            self.scheduler
                .every(DAY_NIGHT_CYCLE_INTERVAL, DAY_NIGHT_CYCLE_INTERVAL, GameTask::DayNight),
            self.scheduler
                .every(SCORE_GAIN_INTERVAL, SCORE_GAIN_INTERVAL, GameTask::GainScore),
        ];
        if self.progress.options.spawn_birds {
            self.round_loops.push(self.scheduler.every(
                BIRD_SPAWN_INTERVAL,
                BIRD_SPAWN_INTERVAL,
                GameTask::SpawnBird,
            ));
        }
    }

    fn stop_loops(&mut self) {
        for handle in self.round_loops.drain(..) {
            self.scheduler.cancel(handle);
        }
    }

    /// Count one drawn frame of `dt` wall-clock seconds. The HUD task
    /// publishes the rate once per interval.
    pub fn record_frame(&mut self, dt: f64) {
        self.fps.record_frame(dt);
    }

    /// One fixed physics step. `flap` is this step's input edge.
    pub fn tick<R: Rng>(&mut self, dt: f64, flap: bool, rng: &mut R) {
        for task in self.scheduler.advance(dt) {
            self.run_task(task, rng);
        }

        self.player.update(dt, flap, &mut self.scheduler);
        self.obstacles.step_active(dt);
        self.coins.step_active(dt);
        self.birds.step_active(dt);

        self.detect_collisions();

        self.recycler.sweep(&mut self.obstacles);
        self.recycler.sweep(&mut self.coins);
        self.recycler.sweep(&mut self.birds);

        for event in self.player.drain_events() {
            self.handle_player_event(event);
        }
    }

    fn run_task<R: Rng>(&mut self, task: GameTask, rng: &mut R) {
        match task {
            GameTask::SpawnObstacle => {
                self.obstacles.spawn(rng);
            }
            GameTask::SpawnCoin => self.spawn_coin(rng),
            GameTask::SpawnBird => self.spawn_bird(rng),
            GameTask::GainScore => self.gain_score(),
            GameTask::DayNight => self.day_night.tick(),
            GameTask::FpsHud => {
                self.fps.sample();
            }
            GameTask::EndInvulnerability => self.player.end_invulnerability(),
            GameTask::RevealMenu => {
                self.reveal_menu = None;
                self.menu_visible = true;
            }
        }
    }

    fn spawn_coin<R: Rng>(&mut self, rng: &mut R) {
        let draw = roll_percent(rng);
        if passes(draw, coin_spawn_threshold(self.progress.skill1_level)) {
            self.coins.spawn(rng);
        }
    }

    fn spawn_bird<R: Rng>(&mut self, rng: &mut R) {
        if !self.progress.options.spawn_birds || !percent_chance(rng, BIRD_SPAWN_CHANCE) {
            return;
        }
        if let Some(index) = self.birds.spawn(rng) {
            if self.birds.get(index).is_some_and(|b| b.chat.is_some()) {
                self.cues.push(SoundCue::BirdChat);
            }
        }
    }

    fn gain_score(&mut self) {
        self.score += self.preset.score_increment;
        if self.progress.record_score(self.score) && !self.new_high_score {
            self.new_high_score = true;
            self.cues.push(SoundCue::NewHighScore);
            log::info!("New high score: {}", self.score);
        }
    }

    fn detect_collisions(&mut self) {
        if !self.player.is_alive() {
            return;
        }
        let center = self.player.position;
        let radius = self.player.radius();

        if self.player.touches_world_edge()
            || self.obstacles.iter_active().any(|o| o.hits(center, radius))
        {
            self.player.on_hazard();
        }

        let reach = radius + COIN_RADIUS;
        let touched: Vec<usize> = self
            .coins
            .iter()
            .enumerate()
            .filter(|(_, coin)| coin.is_active())
            .filter(|(_, coin)| {
                let p = coin.position();
                let (dx, dy) = (p.x - center.x, p.y - center.y);
                dx * dx + dy * dy <= reach * reach
            })
            .map(|(i, _)| i)
            .collect();
        for index in touched {
            self.player.on_coin(index);
        }
    }

    fn handle_player_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::Flapped => self.cues.push(SoundCue::Flap),
            PlayerEvent::CoinTaken(index) => {
                self.coins.deactivate(index);
                self.coins_this_round += 1;
                self.progress.grant_coins(1);
                self.cues.push(SoundCue::CoinTake);
            }
            PlayerEvent::Died => self.on_player_death(),
            PlayerEvent::Respawned => {}
            PlayerEvent::SkillActivated => self.cues.push(SoundCue::SkillStart),
            PlayerEvent::SkillEnded => self.cues.push(SoundCue::SkillEnd),
        }
    }

    fn on_player_death(&mut self) {
        self.progress.total_deaths += 1;
        self.progress.record_score(self.score);
        self.stop_loops();
        self.stop_all_objects();
        self.cues.push(SoundCue::Death);

        self.death_summary = Some(format!(
            "Total Deaths: {}\nHigh Score: {}\nCoins Collected This Round: {}",
            self.progress.total_deaths, self.progress.high_score, self.coins_this_round
        ));
        if let Some(previous) = self.reveal_menu.take() {
            self.scheduler.cancel(previous);
        }
        self.reveal_menu = Some(self.scheduler.after(DEATH_MENU_DELAY, GameTask::RevealMenu));
        self.save_requested = true;

        log::info!(
            "Player died with score {} ({} coins this round)",
            self.score,
            self.coins_this_round
        );
    }

    /// Freeze obstacles and coins in place; drifting birds fly off.
    pub fn stop_all_objects(&mut self) {
        self.obstacles.move_all(MoveDirection::None);
        self.coins.move_all(MoveDirection::None);
        for bird in self.birds.iter_mut().filter(|b| b.is_active()) {
            bird.fly_away_after_player_death();
        }
    }

    /// Start a fresh round in place: clear the board, reset score and respawn.
    pub fn restart(&mut self) {
        self.stop_loops();
        if let Some(handle) = self.reveal_menu.take() {
            self.scheduler.cancel(handle);
        }
        self.player.respawn(&mut self.scheduler);
        self.player.drain_events();

        self.obstacles.deactivate_all();
        self.coins.deactivate_all();
        self.birds.deactivate_all();

        self.score = 0;
        self.coins_this_round = 0;
        self.new_high_score = false;
        self.menu_visible = false;
        self.death_summary = None;
        self.start_loops();
    }

    /// In-game menu ordinal: Play=0, Menu=1, Quit=2.
    pub fn menu_selection(&mut self, index: usize) -> GameMenuAction {
        let action = match index {
            0 => {
                self.restart();
                GameMenuAction::Respawned
            }
            1 => GameMenuAction::LoadMainMenu,
            2 => GameMenuAction::Quit,
            _ => {
                log::warn!("Invalid in-game menu selection {}", index);
                return GameMenuAction::Ignored;
            }
        };
        self.cues.push(SoundCue::UiClick);
        action
    }

    /// Cancel every timer the round owns.
    pub fn teardown(&mut self) {
        self.player.cancel_timers(&mut self.scheduler);
        self.reveal_menu = None;
        self.round_loops.clear();
        self.scheduler.clear();
    }

    /// End the session and hand progress back to the app.
    pub fn into_progress(mut self) -> ProgressState {
        self.teardown();
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::PLAYER_X;
    use crate::core::Difficulty;
    use crate::entities::Vec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session(difficulty: Difficulty) -> GameSession {
        let mut progress = ProgressState::default();
        progress.options.difficulty = difficulty;
        GameSession::new(progress)
    }

    #[test]
    fn test_round_loops_scheduled() {
        let s = session(Difficulty::Easy);
        for task in [
            GameTask::SpawnObstacle,
            GameTask::SpawnCoin,
            GameTask::SpawnBird,
            GameTask::GainScore,
            GameTask::DayNight,
            GameTask::FpsHud,
        ] {
            assert!(s.scheduler().is_task_scheduled(task), "{:?}", task);
        }
    }

    #[test]
    fn test_preset_follows_difficulty() {
        assert_eq!(session(Difficulty::Hard).preset(), Difficulty::Hard.preset());
        let s = session(Difficulty::Medium);
        assert_eq!(s.obstacles.get(0).unwrap().velocity().x, 0.0);
        assert_eq!(s.preset().spawn_delay, 1.25);
    }

    #[test]
    fn test_score_ticks_by_increment() {
        let mut s = session(Difficulty::Medium);
        s.gain_score();
        s.gain_score();
        assert_eq!(s.score, 6);
        assert_eq!(s.score_text(), "6 / 100");
    }

    #[test]
    fn test_new_high_score_cue_once() {
        let mut progress = ProgressState::default();
        progress.high_score = 3;
        let mut s = GameSession::new(progress);
        s.gain_score();
        s.gain_score();
        s.gain_score();
        assert!(s.is_new_high_score());
        let high_cues = s
            .cues
            .drain()
            .into_iter()
            .filter(|c| *c == SoundCue::NewHighScore)
            .count();
        assert_eq!(high_cues, 1);
        assert_eq!(s.progress().high_score, 6);
    }

    #[test]
    fn test_death_freezes_and_schedules_menu() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut s = session(Difficulty::Easy);
        s.obstacles.spawn(&mut rng);
        s.player.on_hazard();
        s.tick(0.016, false, &mut rng);

        assert!(!s.player.is_alive());
        assert_eq!(s.progress().total_deaths, 1);
        assert!(s.take_save_request());
        assert!(!s.take_save_request());
        assert_eq!(s.obstacles.get(0).unwrap().velocity().x, 0.0);
        assert!(!s.scheduler().is_task_scheduled(GameTask::SpawnObstacle));
        assert!(!s.scheduler().is_task_scheduled(GameTask::GainScore));
        assert!(!s.is_menu_visible());

        s.tick(DEATH_MENU_DELAY, false, &mut rng);
        assert!(s.is_menu_visible());
        assert!(s.death_summary().unwrap().starts_with("Total Deaths: 1\n"));
    }

    #[test]
    fn test_coin_overlap_collects_coin() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut s = session(Difficulty::Easy);
        let index = s.coins.spawn(&mut rng).unwrap();
        s.coins.get_mut(index).unwrap().body_mut().position = s.player.position;
        s.tick(0.016, false, &mut rng);

        assert!(!s.coins.get(index).unwrap().is_active());
        assert_eq!(s.coins_this_round, 1);
        assert_eq!(s.progress().coins, 1);
        assert!(s.cues.drain().contains(&SoundCue::CoinTake));
        assert!(s.player.is_alive());
    }

    #[test]
    fn test_pipe_hit_kills_player() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let mut s = session(Difficulty::Easy);
        let index = s.obstacles.spawn(&mut rng).unwrap();
        // Gap spans 1.4..3.6, the player sits in the lower half.
        s.obstacles.get_mut(index).unwrap().body_mut().position = Vec2::new(PLAYER_X, 2.5);
        s.tick(0.016, false, &mut rng);

        assert!(!s.player.is_alive());
        assert_eq!(s.progress().total_deaths, 1);
    }

    #[test]
    fn test_invulnerable_player_passes_pipe() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let mut s = session(Difficulty::Easy);
        let index = s.obstacles.spawn(&mut rng).unwrap();
        s.obstacles.get_mut(index).unwrap().body_mut().position = Vec2::new(PLAYER_X, 2.5);
        s.player.state.invulnerable = true;
        s.tick(0.016, false, &mut rng);

        assert!(s.player.is_alive());
        assert_eq!(s.progress().total_deaths, 0);
    }

    #[test]
    fn test_fps_follows_drawn_frames() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let mut s = session(Difficulty::Easy);
        s.run_task(GameTask::FpsHud, &mut rng);
        assert_eq!(s.fps.shown(), Some(0));

        for _ in 0..20 {
            s.record_frame(0.05);
        }
        s.run_task(GameTask::FpsHud, &mut rng);
        assert_eq!(s.fps.shown(), Some(20));

        for _ in 0..10 {
            s.record_frame(0.01);
        }
        for _ in 0..10 {
            s.record_frame(0.09);
        }
        s.run_task(GameTask::FpsHud, &mut rng);
        assert_eq!(s.fps.shown(), Some(20));

        for _ in 0..100 {
            s.record_frame(0.01);
        }
        s.run_task(GameTask::FpsHud, &mut rng);
        assert_eq!(s.fps.shown(), Some(100));
    }

    #[test]
    fn test_physics_steps_do_not_count_as_frames() {
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        let mut s = session(Difficulty::Easy);
        for _ in 0..10 {
            s.record_frame(0.1);
        }
        s.tick(0.016, false, &mut rng);
        assert_eq!(s.fps.shown(), Some(10));

        for _ in 0..70 {
            s.tick(0.016, false, &mut rng);
        }
        assert_eq!(s.fps.shown(), Some(0));
    }

    #[test]
    fn test_restart_resets_round() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut s = session(Difficulty::Easy);
        s.score = 42;
        s.coins_this_round = 5;
        s.player.on_hazard();
        s.tick(1.0, false, &mut rng);

        assert_eq!(s.menu_selection(0), GameMenuAction::Respawned);
        assert_eq!(s.score, 0);
        assert_eq!(s.coins_this_round, 0);
        assert!(s.player.is_alive());
        assert!(!s.is_menu_visible());
        assert!(s.death_summary().is_none());
        assert_eq!(s.obstacles.active_count(), 0);
        assert!(s.scheduler().is_task_scheduled(GameTask::SpawnObstacle));

        s.run_task(GameTask::SpawnObstacle, &mut rng);
        let o = s.obstacles.iter_active().next().unwrap();
        assert_eq!(o.velocity().x, -3.0);
    }

    #[test]
    fn test_menu_selection_ordinals() {
        let mut s = session(Difficulty::Easy);
        assert_eq!(s.menu_selection(1), GameMenuAction::LoadMainMenu);
        assert_eq!(s.menu_selection(2), GameMenuAction::Quit);
        assert_eq!(s.menu_selection(3), GameMenuAction::Ignored);
    }

    #[test]
    fn test_into_progress_keeps_coins() {
        let mut s = session(Difficulty::Easy);
        s.handle_player_event(PlayerEvent::CoinTaken(0));
        s.handle_player_event(PlayerEvent::CoinTaken(1));
        assert_eq!(s.coins_this_round, 2);
        let progress = s.into_progress();
        assert_eq!(progress.coins, 2);
    }

    #[test]
    fn test_birds_respect_option() {
        let mut progress = ProgressState::default();
        progress.options.spawn_birds = false;
        let mut s = GameSession::new(progress);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..50 {
            s.spawn_bird(&mut rng);
        }
        assert_eq!(s.birds.active_count(), 0);
    }
}
