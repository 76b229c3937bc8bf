pub mod config;
pub mod logging;

// Resolution pipeline
pub mod codec;
pub mod coords;
pub mod destination;
pub mod extract;
pub mod router;
pub mod sanitize;
pub mod target;

// Orchestration around the pipeline
pub mod redirect;

pub use coords::CoordinatePair;
pub use destination::{Destination, IntentKind, NavigationMode};
pub use router::{extract_coordinates, resolve};
pub use target::{build_target_uri, CoordinatePolicy, TargetUriBuilder};
