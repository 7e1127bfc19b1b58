mod availability;
mod compose;
mod facet;
mod matcher;
mod selection;

pub use availability::{available_values, AvailabilityMap};
pub use compose::{compose, MatchedIsland};
pub use facet::{Facet, FacetValue};
pub use matcher::matches;
pub use selection::Selection;
