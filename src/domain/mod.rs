pub mod month;
pub mod order;
pub mod ports;
pub mod skip;
pub mod template;

pub use month::*;
pub use order::*;
pub use ports::*;
pub use skip::*;
pub use template::*;
