//! fontremap CLI library.

pub mod cli;
pub mod compiler;
pub mod convert;
pub mod inspect;
pub mod io;
pub mod prompt;
