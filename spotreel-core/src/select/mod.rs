pub(crate) mod unique;
