//! Ready-made document flows: the brand book, the logo concept sheet, and the
//! website-redesign proposal.
//!
//! Each builder is a pure manifest: theme + options in, [`DocumentFlow`] out.
//! The six hand-maintained variants of the original brand book collapse into
//! the single parameterized builder in [`brand_book`].

pub mod brand_book;
pub mod logo_sheet;
pub mod proposal;

pub use brand_book::{brand_book, BrandBookOptions};
pub use logo_sheet::{logo_sheet, LogoSheetOptions};
pub use proposal::{proposal, ProposalOptions};
