pub(crate) mod catalog;
pub(crate) mod console;
pub(crate) mod locales;
pub(crate) mod prompt;
pub(crate) mod trace;
