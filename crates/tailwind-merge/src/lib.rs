//! Merge Tailwind CSS class lists without style conflicts.
//!
//! Later classes override earlier classes that set the same property under
//! the same modifiers, so `px-2 py-1 p-3` becomes `p-3` while
//! `hover:p-2 p-4` is left alone.
//!
//! ```
//! use tailwind_merge::{Config, TwMerge};
//!
//! let merger = TwMerge::new(Config::default()).unwrap();
//! assert_eq!(merger.merge(["px-2 py-1 bg-red-500", "p-3 bg-[#B91C1C]"]), "p-3 bg-[#B91C1C]");
//! ```

mod cache;
mod class_map;
mod config;
mod conflicts;
mod default_config;
mod merger;
mod parse;
mod shape;
mod validators;


pub use class_map::ClassGroupId;
pub use config::{Config, ConfigError, GroupRef, GroupRefError};
pub use merger::{MergeStats, TwMerge};
pub use parse::ParsedToken;
pub use shape::ClassShape;
pub use validators::Validator;
