pub mod audience;
pub mod usecase;
