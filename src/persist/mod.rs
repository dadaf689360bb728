pub mod autosave;
pub mod sink;

pub use autosave::{AutosavePump, SaveState};
pub use sink::{JsonFileSink, SaveError, SaveSink};
