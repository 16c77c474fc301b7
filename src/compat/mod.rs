mod strcat;
mod strlcat;
mod strlcpy;

pub use strcat::strcat;
pub use strlcat::strlcat;
pub use strlcpy::strlcpy;
