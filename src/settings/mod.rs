//! Account settings.
//!
//! Every settings resource lives under `/{accountname}/settings/<group>/<resource>` and offers the
//! same operations: `get_list`, `get`, `create`, `update`, `delete` and `batch`.
//!
//! All resources here are archivable: `delete` marks the item as archived on the server instead
//! of removing it. Archived items are hidden from `get_list` unless `includearchived` is set, and
//! can still be fetched by ID.

pub mod filterdefinitions;
pub mod orderfees;
pub mod pricelists;
