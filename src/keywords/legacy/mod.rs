//! Draft 4's keyword forms that later drafts redesigned.
pub(crate) mod maximum_draft4;
pub(crate) mod minimum_draft4;
