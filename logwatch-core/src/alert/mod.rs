pub mod engine;
pub mod window;


pub use engine::{AlertEngine, AlertRecord, AlertState};
pub use window::AlertWindow;
