pub(crate) mod host;
pub(crate) mod rail;
pub(crate) mod window;
