pub mod constants;
pub mod easing;
pub mod error;
pub mod frame;
pub mod gate;
pub mod layout;
pub mod lifecycle;
pub mod options;
pub mod params;
pub mod render;

pub use constants::*;
pub use easing::*;
pub use error::*;
pub use frame::*;
pub use gate::*;
pub use layout::*;
pub use lifecycle::*;
pub use options::*;
pub use params::*;
pub use render::*;
