pub mod block;
pub mod height;
pub mod types;

pub use block::BlockHeader;
pub use height::Height;
pub use types::Bytes32;
