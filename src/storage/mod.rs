pub mod mongo;

pub use mongo::{connect, insert_payload, normalize_payload};
