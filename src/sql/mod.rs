// SPDX-License-Identifier: PMPL-1.0-or-later

//! SQL generation for the `content` table

pub mod escape;
pub mod script;
pub mod split;

pub use escape::{escape_value, is_template};
pub use script::{build_script, count_statements, format_row, CONFLICT_CLAUSE, INSERT_HEADER};
pub use split::{chunk_rows, split_file, split_script, write_chunks};
