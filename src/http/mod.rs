//! HTTP layer: transport seam, error classification and the resilient executor.

pub mod classify;
#[cfg(feature = "http")]
pub mod client;
pub mod executor;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(feature = "http")]
pub use client::ReqwestTransport;
pub use executor::ResilientExecutor;
pub use transport::{
    AuthMode, HttpRequest, HttpResponse, Method, RequestContext, RequestOptions, Transport,
};
