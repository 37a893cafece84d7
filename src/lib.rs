pub mod media;
pub mod participant;
pub mod session;
pub mod state;
pub mod toolbar;
pub mod track;

pub use media::*;
pub use participant::*;
pub use session::*;
pub use state::*;
pub use toolbar::*;
pub use track::*;

/// `use call_controls::prelude::*;` to import the crate types
pub mod prelude;
