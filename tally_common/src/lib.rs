mod helpers;
mod money;

pub mod op;

pub use helpers::parse_boolean_flag;
pub use money::{Money, MoneyConversionError, SETTLEMENT_CURRENCY_CODE, SETTLEMENT_CURRENCY_CODE_LOWER};
