pub mod convert;
pub mod directory;
pub mod record;
pub mod timestamp;

pub use convert::*;
pub use directory::*;
pub use record::*;
pub use timestamp::*;
