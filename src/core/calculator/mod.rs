pub mod pairing;
pub mod range;
pub mod worktime;
