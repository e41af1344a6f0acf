//! Code ↔ display-name converters
//!
//! Two independent reference tables, loaded once from bundled
//! tab-separated resources. The data store speaks codes only; these
//! converters are how the interactive surface turns them into names and
//! back. Unknown values convert to `None`, never an error.

mod country;
mod language;
mod table;

pub use country::CountryCodeConverter;
pub use language::LanguageCodeConverter;
pub use table::TableError;
