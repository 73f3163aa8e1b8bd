pub mod arithmetic;
pub mod greeting;
pub mod number_theory;

pub use arithmetic::{add, divide, multiply};
pub use greeting::greet;
pub use number_theory::{factorial, is_prime, primes_in};
