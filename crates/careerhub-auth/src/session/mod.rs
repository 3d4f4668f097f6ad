//! Session lifecycle: the signed-in state, its persistence and the flows
//! that change it.

pub mod manager;
pub mod model;
pub mod store;

pub use manager::SessionManager;
pub use model::Session;
pub use store::SessionStore;
