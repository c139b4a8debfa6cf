pub mod csrf;
pub mod health;
