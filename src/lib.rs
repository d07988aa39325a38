#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod app;
pub mod assets;
pub mod errors;
pub mod renderer;
pub mod resources;
pub mod scene;
pub mod utils;

pub use animation::{Easing, Tween};
pub use app::App;
pub use app::viewport::ViewportController;
pub use assets::{AssetServer, ColorSpace};
pub use errors::{Result, RingboxError};
pub use renderer::Renderer;
pub use renderer::settings::RenderSettings;
pub use resources::primitives::{SphereOptions, create_box, create_sphere};
pub use resources::{Geometry, Material, Mesh, Side, Texture};
pub use scene::{Camera, Light, Node, Scene};
pub use utils::orbit_control::OrbitControls;
