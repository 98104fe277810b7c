// Utils compartidos

pub mod constants;
pub mod storage;
pub mod validadores;

pub use constants::*;
pub use storage::*;
pub use validadores::*;
