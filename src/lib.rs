pub mod clipboard;
pub mod content;
pub mod geometry;
pub mod icons;
pub mod magnetic;
pub mod reveal;
pub mod scramble;
pub mod spotlight;
pub mod telemetry;
pub mod tracker;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
