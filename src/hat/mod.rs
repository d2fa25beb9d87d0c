mod hat;

pub use hat::Hat;
