pub mod constants;
pub mod cover;
pub mod pool;
pub mod sim;
pub mod tracker;

pub static SPRITE_WGSL: &str = include_str!("../shaders/sprite.wgsl");
pub static DISPLACE_WGSL: &str = include_str!("../shaders/displace.wgsl");

pub use cover::*;
pub use pool::*;
pub use sim::*;
pub use tracker::*;
