pub(crate) mod catalog;
pub(crate) mod lookup;
