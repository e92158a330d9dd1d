pub mod invest;
pub mod lotto;

pub use invest::{InvestmentInput, InvestmentReturn, Outlook};
pub use lotto::{BallColor, Draw, DrawHistory};
