//! [`ApiClient`](crate::ApiClient) implementations of the resource traits.

mod auth;
mod company;
mod files;
mod jobs;
