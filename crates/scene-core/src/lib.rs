pub mod clock;
pub mod config;
pub mod constants;
pub mod field;
pub mod ring;
pub mod splash;
pub mod viewport;

pub use clock::*;
pub use constants::*;
pub use config::*;
pub use field::*;
pub use ring::*;
pub use splash::*;
pub use viewport::*;
