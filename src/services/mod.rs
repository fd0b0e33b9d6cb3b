pub mod promotion_selection;
pub mod review_query;

pub use promotion_selection::{PromotionSelectionService, TOP_FEED_SLIDESHOW_PAGE_SIZE};
pub use review_query::ReviewQueryService;
