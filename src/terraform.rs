pub mod state;

pub use state::{Instance, ResourceRecord, StateDocument, load_state};
