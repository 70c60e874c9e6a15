pub mod exec;
pub mod fetch;
pub mod html;
pub mod output;

pub use fetch::fetch_aggregate;
pub use html::{render_page, write_page};
pub use output::{output_json, output_ndjson, output_summary, output_text};
