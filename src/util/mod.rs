pub mod clipboard;
pub mod page;

pub use clipboard::{ClipboardWriter, Osc52Clipboard};
pub use page::{paginate, Page};
