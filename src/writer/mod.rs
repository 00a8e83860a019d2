//! Report emitters. Both write through a caller-supplied sink so the
//! core stays free of I/O.
pub mod json;
pub mod text;
