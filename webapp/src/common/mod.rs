pub mod navigator;
pub mod shadow;
pub mod style;
pub mod toast;
