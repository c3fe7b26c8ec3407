//! Request execution plumbing shared by the provider implementation.

pub mod http;
