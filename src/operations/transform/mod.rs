mod center_on_origin;
mod general;
mod rotate;
mod translate;

pub use center_on_origin::CenterOnOrigin;
pub use general::{GeneralTransform, Transform2d};
pub use rotate::{rotate_points, Rotate};
pub use translate::{translate_points, Translate};
