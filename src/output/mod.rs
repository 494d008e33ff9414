// Presentation layer.
//
// Terminal rendering lives here; the analysis modules stay free of any
// formatting concerns. JSON output goes through serde in the binary.

pub mod terminal;
