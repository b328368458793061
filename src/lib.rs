pub mod audio;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod host;
pub mod input;
pub mod level;
pub mod outcome;
pub mod physics;
pub mod player;
pub mod renderer;
pub mod session;
pub mod velocity;
pub mod viewport;

pub use config::GameConfig;
pub use error::{ConfigError, LoadError};
pub use game::{Game, Hud, TickReport};
