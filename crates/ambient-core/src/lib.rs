//! Platform-free animation logic for the ambient canvas effects and the
//! seamless marquee. Hosts supply the drawing surface, the frame scheduler
//! and the measured marquee track through the traits defined here.

pub mod config;
pub mod constants;
pub mod dust;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod marquee;
pub mod particles;
pub mod schedule;
pub mod session;
pub mod surface;
pub mod timeline;

pub use config::*;
pub use dust::*;
pub use engine::*;
pub use error::AmbientError;
pub use marquee::*;
pub use particles::*;
pub use schedule::*;
pub use session::*;
pub use surface::*;
pub use timeline::*;
