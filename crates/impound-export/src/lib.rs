//! Table and interactive-graph writers for stage-storage output.
//!
//! These are the presentation collaborators around the sweep engine:
//! a delimited three-column table ([`write_table`]) and a standalone
//! interactive HTML graph ([`write_html`]). Both consume the finished
//! core data model, so no format knowledge leaks into the engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod html;
mod table;

pub use html::{html_string, write_html};
pub use table::{table_string, write_table, TABLE_HEADER};
