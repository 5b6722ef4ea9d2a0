// Command handlers, one per subcommand
pub mod calc;
pub mod configure;
pub mod primes;
pub mod squares;
