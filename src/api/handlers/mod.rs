pub mod bets;
pub mod coach;
pub mod feeds;
pub mod nlp;
pub mod share;
pub mod system;

pub use bets::*;
pub use coach::*;
pub use feeds::*;
pub use nlp::*;
pub use share::*;
pub use system::*;
