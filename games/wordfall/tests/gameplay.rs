use wordfall::session::Session;
use wordfall::tuning::*;
use wordfall::words::FallingWord;
use wordfall::{Phase, Wordfall};
use wordfall_engine::{DrawCommand, InputEvent, Key, SoundId, SurfaceLayer};
use wordfall_web::GameRunner;

const MANIFEST: &str = include_str!("../assets/manifest.json");
const FRAME_MS: f64 = 16.0;

struct Harness {
    runner: GameRunner<Wordfall>,
    now: f64,
}

impl Harness {
    fn new() -> Self {
        let mut runner = GameRunner::new(Wordfall::new());
        runner.init(MANIFEST).unwrap();
        let mut harness = Self { runner, now: 0.0 };
        harness.frame();
        harness
    }

    fn frame(&mut self) {
        self.runner.frame(self.now).unwrap();
        self.now += FRAME_MS;
    }

    fn press(&mut self, key: Key) {
        self.runner.push_input(InputEvent::KeyDown { key });
        self.runner.push_input(InputEvent::KeyUp { key });
    }

    fn tap(&mut self, key: Key) {
        self.press(key);
        self.frame();
    }

    /// Type every character of `text` within a single frame.
    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(Key::Char(c));
        }
        self.frame();
    }

    fn start_run(&mut self) {
        self.tap(Key::Enter);
        assert_eq!(self.phase(), Phase::Run);
    }

    fn phase(&self) -> Phase {
        self.runner.game().phase()
    }

    fn session(&mut self) -> &mut Session {
        self.runner.game_mut().session_mut()
    }

    /// Replace whatever spawned so far with a single word.
    fn only_word(&mut self, word: FallingWord) {
        let session = self.session();
        session.words.clear();
        assert!(session.words.push(word));
    }

    fn sound(&self, name: &str) -> SoundId {
        self.runner.context().assets.sound(name).unwrap()
    }

    fn played(&self, name: &str) -> bool {
        let id = self.sound(name);
        self.runner.context().sounds.iter().any(|cue| cue.sound == id)
    }

    fn drew_on(&self, layer: SurfaceLayer) -> bool {
        self.runner.context().surfaces.layer(layer).image_count() > 0
    }
}

#[test]
fn start_screen_until_enter() {
    let mut h = Harness::new();
    assert_eq!(h.phase(), Phase::Start);
    let start = h.runner.context().assets.texture("start").unwrap();
    let main = h.runner.context().surfaces.layer(SurfaceLayer::Main);
    assert!(matches!(main.commands()[0], DrawCommand::Clear));
    assert!(matches!(main.commands()[1], DrawCommand::Image { texture, .. } if texture == start.id));

    h.tap(Key::Char('r'));
    assert_eq!(h.phase(), Phase::Start);

    h.start_run();
    assert_eq!(h.session().lives, START_LIVES);
    assert_eq!(h.session().score, 0);
}

#[test]
fn words_spawn_and_stay_unique() {
    let mut h = Harness::new();
    h.start_run();

    let mut saw_spawn_burst = false;
    for _ in 0..600 {
        h.frame();
        saw_spawn_burst |= h.drew_on(SurfaceLayer::Spawn);

        let session = h.session();
        let mut texts: Vec<String> = session.words.iter().map(|w| w.text.clone()).collect();
        let count = texts.len();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), count);
    }
    assert!(!h.session().words.is_empty());
    assert!(saw_spawn_burst);
}

#[test]
fn completing_a_word_at_target_size_scores() {
    let mut h = Harness::new();
    h.start_run();
    h.only_word(FallingWord::new("cat", 40.0, 30.0, 0.0, false));
    h.session().target.value = 3;
    h.session().input = "ca".to_string();

    h.type_text("t");

    let session = h.session();
    assert_eq!(session.score, 1);
    assert!(!session.words.in_use("cat"));
    assert!(session.input.is_empty());
    assert!((session.spawn_interval - (SPAWN_INTERVAL - SPAWN_INTERVAL_STEP)).abs() < 1e-5);
    assert_eq!(session.lives, START_LIVES);
    assert!(h.played("jump1"));
    assert!(!h.played("pick1"));
    assert!(h.drew_on(SurfaceLayer::Vanish));
}

#[test]
fn completing_a_word_at_the_wrong_size_costs_a_life() {
    let mut h = Harness::new();
    h.start_run();
    h.only_word(FallingWord::new("cat", 40.0, 30.0, 0.0, false));
    h.session().target.value = 4;

    h.type_text("cat");

    let session = h.session();
    assert_eq!(session.lives, START_LIVES - 1);
    assert_eq!(session.score, 0);
    assert!(session.input.is_empty());
    assert!(session.words.in_use("cat"));
    let cat = session.words.iter().find(|w| w.text == "cat").unwrap();
    assert!(cat.typed.is_empty());
    assert!(h.played("explode1"));
    assert!(!h.drew_on(SurfaceLayer::Dead));
}

#[test]
fn bonus_word_grants_a_life_after_a_delay() {
    let mut h = Harness::new();
    h.start_run();
    h.only_word(FallingWord::new("cat", 40.0, 30.0, 0.0, true));
    h.session().target.value = 3;

    h.type_text("cat");
    assert_eq!(h.session().score, 1);
    assert_eq!(h.session().lives, START_LIVES);
    assert!(h.played("pick1"));
    assert!(h.drew_on(SurfaceLayer::Heart));

    for _ in 0..25 {
        h.frame();
    }
    assert_eq!(h.session().lives, START_LIVES + 1);
}

#[test]
fn boundary_miss_on_last_life_ends_the_game() {
    let mut h = Harness::new();
    h.start_run();
    h.only_word(FallingWord::new("cat", 40.0, 204.0, 10.0, false));
    h.session().lives = 1;

    h.frame();

    assert_eq!(h.phase(), Phase::GameOver);
    assert_eq!(h.session().score, 0);
    assert_eq!(h.session().lives, 0);
    assert!(!h.session().words.in_use("cat"));
    assert!(h.played("explode1") || h.played("explode2"));
    assert!(h.drew_on(SurfaceLayer::Dead));

    h.frame();
    let json = h.runner.frame_json().unwrap();
    assert!(json.contains("Score: 0"));
}

#[test]
fn simultaneous_misses_still_end_the_game() {
    let mut h = Harness::new();
    h.start_run();
    h.only_word(FallingWord::new("cat", 40.0, 204.0, 10.0, false));
    assert!(h.session().words.push(FallingWord::new("dog", 90.0, 204.0, 10.0, false)));
    h.session().lives = 1;

    h.frame();
    assert_eq!(h.phase(), Phase::GameOver);
    assert_eq!(h.session().lives, -1);
}

#[test]
fn restart_from_game_over_resets_the_session() {
    let mut h = Harness::new();
    h.start_run();
    h.only_word(FallingWord::new("cat", 40.0, 204.0, 10.0, false));
    h.session().lives = 1;
    h.frame();
    assert_eq!(h.phase(), Phase::GameOver);
    h.session().score = 7;

    h.tap(Key::Enter);
    assert_eq!(h.phase(), Phase::GameOver);

    h.tap(Key::Char('R'));
    assert_eq!(h.phase(), Phase::Start);
    let session = h.session();
    assert_eq!(session.score, 0);
    assert_eq!(session.lives, START_LIVES);
    assert!(session.words.is_empty());
    assert!(session.input.is_empty());
}

#[test]
fn backspace_clears_the_whole_buffer() {
    let mut h = Harness::new();
    h.start_run();
    h.only_word(FallingWord::new("sunflower", 40.0, 30.0, 0.0, false));

    h.type_text("Su1n");
    assert_eq!(h.session().input, "sun");
    assert_eq!(h.session().words.iter().find(|w| w.text == "sunflower").unwrap().typed, "sun");

    h.tap(Key::Backspace);
    assert!(h.session().input.is_empty());
    assert!(h.played("blip3"));
    assert!(h.session().words.iter().find(|w| w.text == "sunflower").unwrap().typed.is_empty());
}

#[test]
fn typing_outside_a_run_is_ignored() {
    let mut h = Harness::new();
    h.type_text("abc");
    assert!(h.session().input.is_empty());
    assert!(h.runner.context().sounds.is_empty());
}

#[test]
fn manifest_without_a_needed_asset_aborts_startup() {
    let mut runner = GameRunner::new(Wordfall::new());
    let err = runner.init(r#"{ "textures": {}, "sounds": {} }"#).unwrap_err();
    assert!(err.to_string().contains("start"));
    assert!(!runner.is_initialized());
}
