pub mod layer;
pub mod surface;
