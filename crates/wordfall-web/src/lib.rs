pub mod runner;

pub use runner::{FrameSnapshot, GameRunner, LayerFrame};
pub use wordfall_engine;

/// Convert an engine error into a JS `Error` so the host promise rejects.
pub fn to_js_error(err: wordfall_engine::EngineError) -> wasm_bindgen::JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// This macro generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_frame, input handlers, frame accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// wordfall_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `wordfall_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used in the initialization log message
///
/// The calling crate must depend on `wasm-bindgen`, `log`, `console_log` and
/// `console_error_panic_hook`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;
        use $crate::wordfall_engine::{InputEvent, Key, MouseButton};

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(
            f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R,
        ) -> Result<R, JsValue> {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => Ok(f(runner)),
                None => Err($crate::to_js_error(
                    $crate::wordfall_engine::EngineError::NotInitialized,
                )),
            })
        }

        /// Build the runner, resolve every asset the game needs, and run `Game::init`.
        /// Rejects if the manifest is malformed or lacks a required asset.
        #[wasm_bindgen]
        pub fn game_init(manifest_json: &str) -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let mut runner = $crate::GameRunner::new(<$game_type>::new());
            runner.init(manifest_json).map_err($crate::to_js_error)?;

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $game_name);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn game_frame(now_ms: f64) -> Result<(), JsValue> {
            with_runner(|r| r.frame(now_ms))?.map_err($crate::to_js_error)
        }

        #[wasm_bindgen]
        pub fn game_key_down(key: &str) -> Result<(), JsValue> {
            let key = Key::from_dom(key);
            with_runner(|r| r.push_input(InputEvent::KeyDown { key }))
        }

        #[wasm_bindgen]
        pub fn game_key_up(key: &str) -> Result<(), JsValue> {
            let key = Key::from_dom(key);
            with_runner(|r| r.push_input(InputEvent::KeyUp { key }))
        }

        /// Pointer coordinates arrive in CSS pixels and are scaled down to world space.
        #[wasm_bindgen]
        pub fn game_pointer_down(button: i16, x: f32, y: f32) -> Result<(), JsValue> {
            let button = MouseButton::from_dom(button);
            with_runner(|r| {
                let s = r.pixel_scale();
                r.push_input(InputEvent::PointerDown { button, x: x / s, y: y / s })
            })
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(button: i16, x: f32, y: f32) -> Result<(), JsValue> {
            let button = MouseButton::from_dom(button);
            with_runner(|r| {
                let s = r.pixel_scale();
                r.push_input(InputEvent::PointerUp { button, x: x / s, y: y / s })
            })
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) -> Result<(), JsValue> {
            with_runner(|r| {
                let s = r.pixel_scale();
                r.push_input(InputEvent::PointerMove { x: x / s, y: y / s })
            })
        }

        // ---- Data accessors ----

        /// Draw commands per touched layer plus this frame's sound cues.
        #[wasm_bindgen]
        pub fn frame_json() -> Result<String, JsValue> {
            with_runner(|r| r.frame_json())?.map_err($crate::to_js_error)
        }

        /// Texture and sound names in id order.
        #[wasm_bindgen]
        pub fn asset_index_json() -> Result<String, JsValue> {
            with_runner(|r| r.asset_index_json())?.map_err($crate::to_js_error)
        }

        #[wasm_bindgen]
        pub fn world_width() -> Result<f32, JsValue> {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn world_height() -> Result<f32, JsValue> {
            with_runner(|r| r.world_height())
        }

        #[wasm_bindgen]
        pub fn pixel_scale() -> Result<f32, JsValue> {
            with_runner(|r| r.pixel_scale())
        }
    };
}
