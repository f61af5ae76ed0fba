pub mod primality;

pub mod counter;

pub mod input;

pub mod report;

pub use counter::{count_parallel, count_sequential, CountError, WorkerCount};
pub use input::{read_numbers, InputError};
pub use primality::is_prime;
