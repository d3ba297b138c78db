
pub use harness::*;
pub use mock_output::*;
pub use ws_client::*;
