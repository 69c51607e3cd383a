pub mod backup;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod del;
pub mod expected;
pub mod ledger;
pub mod log;
pub mod period;
pub mod staff;
pub mod worktime;
