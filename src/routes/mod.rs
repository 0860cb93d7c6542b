mod health_check;
mod subscribe;
mod thanks;

pub use health_check::*;
pub use subscribe::*;
pub use thanks::*;
