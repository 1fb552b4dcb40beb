//! Platformer character locomotion: a jump/fall state machine with buffered
//! and coyote jumps, variable jump height, apex hang and fast fall, driven
//! through bevy and avian2d.

pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod locomotion;
pub mod movement;
