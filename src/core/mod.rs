pub mod constants;
pub mod cursor;
pub mod ease;
pub mod interp;
pub mod markup;
pub mod projects;
pub mod selection;
pub mod spring;
pub mod state;

pub use cursor::*;
pub use ease::*;
pub use interp::*;
pub use projects::*;
pub use selection::*;
pub use spring::*;
pub use state::*;
