// Thin request adapter: maps `/{category}/{source}/{target}/{input}` onto the
// converter and renders the result as a status and body

pub mod response;
pub mod route;

pub use response::*;
pub use route::*;
