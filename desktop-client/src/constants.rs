pub const EVENT_LOG_SIZE: usize = 64;
