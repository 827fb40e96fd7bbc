mod catalog;
mod loader;
mod raw;
mod source;

pub use catalog::CountryCatalog;
pub use loader::JsonFileSource;
pub use raw::{RawCountry, parse_countries};
pub use source::{CountrySource, RestCountriesSource};
