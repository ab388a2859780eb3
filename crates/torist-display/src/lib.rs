//! Presentation helpers for merged checklist views.
//!
//! Nothing here changes data: columns are reordered so the reader's own
//! language comes first, headers are translated for display, and
//! interface text is looked up per [`Locale`].

pub mod locale;
pub mod messages;
pub mod order;
pub mod translate;

pub use locale::{Locale, ParseLocaleError};
pub use messages::Messages;
pub use order::{order_columns, priority_order};
pub use translate::{
    column_label, source_column_label, translate_column, translate_columns, translate_view_columns,
};
