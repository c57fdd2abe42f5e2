pub mod transaction_base;
