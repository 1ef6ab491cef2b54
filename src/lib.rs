#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod change;
pub mod direction;
pub mod plate;
pub mod pool;
pub mod solution;
pub mod solver;
pub mod solver_error;
pub mod stack;
