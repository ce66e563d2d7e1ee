pub mod record;
pub mod schedule;
pub mod slot;
pub mod time_mention;
pub mod weekday;
