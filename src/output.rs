mod export;
mod table;
mod tree;

pub use export::{csv_path, export_groups, export_rows};
pub use table::{
    render_count, render_count_check, render_ephemeral, render_frequency, render_groups,
    render_rows, render_summary, render_type_instances,
};
pub use tree::render_group_tree;
