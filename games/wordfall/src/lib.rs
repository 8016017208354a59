use wasm_bindgen::prelude::*;

pub mod fx;
pub mod game;
pub mod session;
pub mod target;
pub mod tuning;
pub mod typing;
pub mod words;

pub use game::{Phase, Wordfall};

wordfall_web::export_game!(Wordfall, "wordfall");
