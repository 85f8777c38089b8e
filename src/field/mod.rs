pub(crate) mod background;
pub(crate) mod compose;
pub(crate) mod ribbon;
