pub mod movement;
pub mod merge;
pub mod rules;
pub mod render;

pub use movement::*;
pub use merge::*;
pub use rules::*;
pub use render::*;
