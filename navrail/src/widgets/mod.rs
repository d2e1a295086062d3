pub(crate) mod rail;
