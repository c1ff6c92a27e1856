extern crate nalgebra_glm as glm;

mod fetch;
mod interaction;
mod location;
mod map_state;
mod marker;
mod math;
mod popup;
mod search;
mod selection;
mod view;

pub use fetch::*;
pub use interaction::*;
pub use location::*;
pub use map_state::*;
pub use marker::*;
pub use math::*;
pub use popup::*;
pub use search::*;
pub use selection::*;
pub use view::*;
