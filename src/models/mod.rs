pub mod catalog;
pub mod intent;
pub mod session;
pub mod view;
