pub mod feed_handler;

pub use feed_handler::{
    __path_get_category_feed, __path_get_new_arrivals, get_category_feed, get_new_arrivals,
};
