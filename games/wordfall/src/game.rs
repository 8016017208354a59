use glam::Vec2;
use wordfall_engine::*;

use crate::fx::{self, GameAssets, Sounds, Textures};
use crate::session::Session;
use crate::tuning::*;
use crate::typing::{self, KeyOutcome, MatchOutcome};

/// Game state machine phases. Cycles Start -> Run -> GameOver -> Start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    Run,
    GameOver,
}

pub struct Wordfall {
    session: Session,
    phase: Phase,
    /// Phase dispatched this frame; its screen is the one drawn, even if a
    /// transition fired afterwards.
    shown: Phase,
    assets: Option<GameAssets>,
}

impl Wordfall {
    pub fn new() -> Self {
        Self {
            session: Session::new(WORLD_WIDTH, WORLD_HEIGHT),
            phase: Phase::Start,
            shown: Phase::Start,
            assets: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    fn enter(&mut self, phase: Phase) {
        log::info!("{:?} -> {:?} (score {})", self.phase, phase, self.session.score);
        if phase == Phase::Start {
            self.session.reset();
        }
        self.phase = phase;
    }

    fn run(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32, assets: &GameAssets) {
        for key in input.keys_down() {
            self.type_key(ctx, assets, key);
        }

        let granted = self.session.apply_due(ctx.elapsed());
        if granted > 0 {
            log::debug!("bonus life granted, lives {}", self.session.lives);
        }

        let width = ctx.config.world_width;
        let height = ctx.config.world_height;

        for word in self.session.words.advance(dt, height) {
            play_random(ctx, &assets.sounds.explosions, SFX_VOLUME);
            let (particle, emitter) = fx::dead(&assets.textures, &word);
            ctx.spawn_emitter(&particle, &emitter);
            self.session.lives -= 1;
            log::debug!("'{}' fell off, lives {}", word.text, self.session.lives);
        }

        self.session.ensure_target(&mut ctx.rng);
        self.session.target.update(dt, height);

        if self.session.words.len() < MIN_ACTIVE_WORDS {
            let count = ctx.rng.range_int(0, MAX_SPAWN_BATCH);
            self.spawn_batch(ctx, &assets.textures, count, width);
        }
        if self.session.tick_spawn_timer(dt) {
            let count = ctx.rng.range_int(0, MAX_SPAWN_BATCH);
            self.spawn_batch(ctx, &assets.textures, count, width);
        }

        if self.session.is_over() {
            self.enter(Phase::GameOver);
        }
    }

    fn type_key(&mut self, ctx: &mut EngineContext, assets: &GameAssets, key: Key) {
        let sounds: &Sounds = &assets.sounds;
        match typing::apply_key(&mut self.session.input, key) {
            KeyOutcome::Appended(_) => play_random(ctx, &sounds.blips, BLIP_VOLUME),
            KeyOutcome::Cleared => ctx.play_sound(sounds.blips[2], BLIP_VOLUME),
            KeyOutcome::Ignored => {}
        }

        let now = ctx.elapsed();
        for outcome in typing::match_input(&mut self.session, &mut ctx.rng, now) {
            match outcome {
                MatchOutcome::Hit(word) => {
                    if word.bonus {
                        ctx.play_sound(sounds.pick, SFX_VOLUME);
                        let (particle, emitter) =
                            fx::heart(&assets.textures, self.session.lives, ctx.config.world_height);
                        ctx.spawn_emitter(&particle, &emitter);
                    }
                    ctx.play_sound(sounds.jump, SFX_VOLUME);
                    self.session.target.jump();
                    let (particle, emitter) = fx::vanish(&assets.textures, &word);
                    ctx.spawn_emitter(&particle, &emitter);
                }
                MatchOutcome::WrongSize { .. } => {
                    ctx.play_sound(sounds.explosions[0], SFX_VOLUME);
                }
            }
        }
    }

    fn spawn_batch(&mut self, ctx: &mut EngineContext, textures: &Textures, count: i32, width: f32) {
        for _ in 0..count {
            let Some(word) = self.session.words.spawn(&mut ctx.rng, width) else {
                log::warn!("every dictionary word is on screen");
                return;
            };
            let (particle, emitter) = fx::spawn(textures, word);
            ctx.spawn_emitter(&particle, &emitter);
        }
    }

    fn draw_run(&self, main: &mut DrawList, config: &GameConfig, textures: &Textures) {
        let width = config.world_width;
        let height = config.world_height;
        let word_style = TextStyle::new(WORD_FONT, WORD_COLOR);
        let typed_style = TextStyle::new(WORD_FONT, TYPED_COLOR);

        main.draw_texture(textures.bg, Vec2::ZERO);

        for word in self.session.words.iter() {
            main.draw_text(&word.text, word.position(), &word_style);
            if !word.typed.is_empty() {
                main.draw_text(&word.typed, word.position(), &typed_style);
            }
            if word.bonus {
                main.draw_texture(textures.heart, word.position() + Vec2::new(-10.0, -8.0));
            }
        }

        let input = &self.session.input;
        let input_x = width / 2.0 - GLYPH_WIDTH * input.len() as f32 / 2.0;
        main.draw_text(input, Vec2::new(input_x, height - 20.0), &typed_style);

        main.draw_text(&self.session.score.to_string(), Vec2::new(3.0, 10.0), &typed_style);

        for i in 0..self.session.lives.max(0) {
            main.draw_texture(textures.heart, Vec2::new(i as f32 * 9.0, height - 10.0));
        }

        let target = &self.session.target;
        main.draw_text(
            &target.value.to_string(),
            target.position,
            &TextStyle::new(TARGET_FONT, TYPED_COLOR),
        );
    }

    fn draw_game_over(&self, main: &mut DrawList, config: &GameConfig, textures: &Textures) {
        main.clear();
        main.draw_texture(textures.gameover, Vec2::ZERO);
        main.draw_text(
            &format!("Score: {}", self.session.score),
            Vec2::new(config.world_width / 2.0 - 24.0, config.world_height / 2.0 + 8.0),
            &TextStyle::new(WORD_FONT, WORD_COLOR),
        );
    }
}

impl Default for Wordfall {
    fn default() -> Self {
        Self::new()
    }
}

fn play_random(ctx: &mut EngineContext, clips: &[SoundId], volume: f32) {
    if let Some(&sound) = ctx.rng.choose(clips) {
        ctx.play_sound(sound, volume);
    }
}

impl Game for Wordfall {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            pixel_scale: PIXEL_SCALE,
            seed: SEED,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), EngineError> {
        self.assets = Some(GameAssets::resolve(&ctx.assets)?);
        self.session = Session::new(ctx.config.world_width, ctx.config.world_height);
        self.phase = Phase::Start;
        self.shown = Phase::Start;
        log::info!("wordfall: {} words in the dictionary", crate::words::DICTIONARY.len());
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32) {
        let Some(assets) = self.assets else {
            return;
        };

        self.shown = self.phase;
        match self.phase {
            Phase::Start => self.session.reset(),
            Phase::Run => self.run(ctx, input, dt, &assets),
            Phase::GameOver => {}
        }

        match self.phase {
            Phase::Start if input.is_action_just_pressed(Action::Start) => self.enter(Phase::Run),
            Phase::GameOver if input.is_action_just_pressed(Action::Restart) => {
                self.enter(Phase::Start)
            }
            _ => {}
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        let Some(assets) = &self.assets else {
            return;
        };
        let main = ctx.surfaces.layer_mut(SurfaceLayer::Main);
        match self.shown {
            Phase::Start => {
                main.clear();
                main.draw_texture(assets.textures.start, Vec2::ZERO);
            }
            Phase::Run => self.draw_run(main, ctx.config, &assets.textures),
            Phase::GameOver => self.draw_game_over(main, ctx.config, &assets.textures),
        }
    }
}
