pub mod courses;
pub mod docs;
pub mod selection;
pub mod session;

pub use courses::*;
pub use docs::*;
pub use selection::*;
pub use session::*;
