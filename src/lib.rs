mod color;
pub use color::*;

mod scale;
pub use scale::*;

mod error;
pub use error::*;

mod heat;
pub use heat::*;

mod units;
pub use units::*;

mod fade;
pub use fade::*;

mod random;
pub use random::*;
