//! Wire types and design tokens shared between the storefront server and
//! the WASM front-end.

pub mod forms;
pub mod theme;
