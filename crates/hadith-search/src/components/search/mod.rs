//! Search page: query entry, filters, synthesized answer and ranked results.

mod answer_panel;
mod empty_state;
mod filter_panel;
mod hadith_card;
mod search_box;
mod search_view;

pub use answer_panel::AnswerPanel;
pub use empty_state::EmptyState;
pub use filter_panel::FilterPanel;
pub use hadith_card::{HadithCard, SkeletonHadithCard};
pub use search_box::SearchBox;
pub use search_view::SearchView;
