//! Web API module.
//!
//! Two HTTP adapters over the shared relay core: the standalone server
//! (`/api/send-email`, `/api/send-reply`, `/health`) and the
//! serverless-function surface (`/sendEmail`, `/sendReplyEmail`).

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::{create_app, create_function_router, create_router};
pub use server::WebServer;
