pub mod demo_pref;
pub mod hash_map2d;
pub mod map2d;

pub use crate::hash_map2d::HashMap2D;
pub use crate::map2d::{create_instance, Map2D};
