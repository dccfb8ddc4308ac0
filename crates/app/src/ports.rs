//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the session logic and the outside world:
//! the network on one side, the rendered page (or terminal) on the other.

pub mod transport;
pub mod ui;

pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, RequestOptions};
pub use ui::Ui;
