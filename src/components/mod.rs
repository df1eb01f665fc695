//! UI Components
//!
//! Reusable Leptos components, one per feature surface.

mod notice_view;
mod register_form;
mod restaurant_list;
mod review_form;
mod search_filters;
mod section_nav;

pub use notice_view::NoticeView;
pub use register_form::RegisterForm;
pub use restaurant_list::RestaurantList;
pub use review_form::ReviewForm;
pub use search_filters::SearchFilters;
pub use section_nav::SectionNav;
