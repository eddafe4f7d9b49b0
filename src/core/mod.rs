pub mod invoker;
pub mod subdomains;

pub use invoker::{Invoker, DOMAIN_FLAG};
pub use subdomains::{RawOutput, SubdomainList};
