pub mod place;

pub use place::{NewPlace, Place, ReviewPatch};
