pub mod busy;
pub mod theme;
pub mod view;
