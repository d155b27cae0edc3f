pub mod collision;
pub mod intents;
pub mod movement;
pub mod reset;
pub mod scoring;

pub use collision::*;
pub use intents::*;
pub use movement::*;
pub use reset::*;
pub use scoring::*;
