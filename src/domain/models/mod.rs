mod analysis_input;
mod classification;
mod intent;
mod operation;
mod sentiment;
mod summary;

pub use analysis_input::*;
pub use classification::*;
pub use intent::*;
pub use operation::*;
pub use sentiment::*;
pub use summary::*;
