//! Request guards and session wrappers used by the controllers.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
