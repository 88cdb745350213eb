mod marker;
mod registry;
mod transform;

pub use marker::{DEFAULT_MARKER, HeaderMarker};
pub use registry::{HeaderRegistry, YEAR_PLACEHOLDER};
pub use transform::insert_header;
