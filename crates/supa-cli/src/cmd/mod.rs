pub mod check;
pub mod install;
