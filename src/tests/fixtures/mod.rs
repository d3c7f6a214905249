// Shared test fixtures. Compiled into the crate only under cfg(test).

pub mod baskets;
pub mod catalog;
pub mod orders;
