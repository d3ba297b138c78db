mod error;
mod room;
mod routes;
mod signaling;
mod state;

pub use error::*;
pub use room::*;
pub use routes::*;
pub use signaling::*;
pub use state::*;
