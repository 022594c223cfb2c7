pub mod editor;
pub mod viewer;
