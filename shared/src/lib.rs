pub mod models;
pub mod utils;

// Module declarations only; the Row model and the brazilian_format helpers
// are shared between the engine library and its binary surface.
