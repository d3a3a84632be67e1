pub mod pattern;
pub mod transform;
pub mod value_objects;
pub mod verdict;

pub use transform::slugify;
pub use value_objects::Separator;
pub use verdict::{SlugVerdict, SlugViolation};
