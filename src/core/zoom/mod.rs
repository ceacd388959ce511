pub mod controller;
pub mod limits;
pub mod status;

pub use controller::ZoomController;
pub use limits::ZoomLimits;
pub use status::ZoomState;
