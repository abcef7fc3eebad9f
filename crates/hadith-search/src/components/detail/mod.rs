//! Detail route for a single hadith.

mod detail_view;

pub use detail_view::HadithDetailView;
