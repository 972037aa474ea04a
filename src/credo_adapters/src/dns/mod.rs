pub mod hickory_mx_resolver;
pub mod static_mx_resolver;

pub use hickory_mx_resolver::HickoryMxResolver;
pub use static_mx_resolver::StaticMxResolver;
