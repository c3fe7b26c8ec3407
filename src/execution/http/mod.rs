//! HTTP utilities: header assembly and the injectable transport seam.

pub mod headers;
pub mod transport;
