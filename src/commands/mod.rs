pub mod search;

pub use search::{Outcome, Presentation, SearchCommand};
