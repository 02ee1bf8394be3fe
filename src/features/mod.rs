//! Feature modules layered on top of the core interpreters.

pub mod nlp;
