//! Geographic data, projection, and map rendering.

mod feature;
mod path;
mod projection;
mod renderer;

pub use feature::{decode_topology, CountryFeature};
pub use path::{point_in_rings, project_feature, FeaturePath};
pub use projection::GlobeProjection;
pub use renderer::render_map;
