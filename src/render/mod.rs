pub(crate) mod base;
pub(crate) mod cancel;
pub(crate) mod grain;
pub(crate) mod params;
pub(crate) mod pipeline;
pub(crate) mod session;
pub(crate) mod stripes;
