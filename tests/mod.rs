pub mod convert;
pub mod fallible;
pub mod macros;
pub mod maybe;
