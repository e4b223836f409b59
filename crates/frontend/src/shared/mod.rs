pub mod api_utils;
pub mod dom;
pub mod forms;
pub mod icons;
pub mod theme;
