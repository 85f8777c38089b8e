pub(crate) mod simplex;
